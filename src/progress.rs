//! The progress entry form, independent of how it is rendered.
//!
//! A [`ProgressDraft`] holds exactly what the user typed. It only becomes a
//! [`CourseProgress`] once every field validates, and only then is the stored
//! record touched.

use crate::{
	data::{format_day, format_timestamp, parse_input_day, CourseProgress, UserRecord},
	storage::{Store, StorageError},
};
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
	CourseName,
	CurrentModule,
	HoursSpent,
	Percentage,
	Date,
}

impl Field {
	pub fn label(self) -> &'static str {
		match self {
			Self::CourseName => "Course Name",
			Self::CurrentModule => "Current Module/Topic",
			Self::HoursSpent => "Hours Spent",
			Self::Percentage => "Progress %",
			Self::Date => "Date",
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
	#[error("This field is required.")]
	Required,
	#[error("Hours Spent must be a non-negative number.")]
	InvalidHours,
	#[error("Progress % must be a whole number between 0 and 100.")]
	InvalidPercentage,
	#[error("Date must be a valid calendar date.")]
	InvalidDate,
}

/// Every field that failed, at most one error each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
	pub fn get(&self, field: Field) -> Option<FieldError> {
		self.0.get(&field).copied()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
		self.0.keys().copied()
	}

	fn insert(&mut self, field: Field, error: FieldError) {
		self.0.entry(field).or_insert(error);
	}
}

impl std::fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let missing = self.0.values().any(|error| *error == FieldError::Required);
		match missing {
			true => f.write_str("Please fill in all required fields."),
			false => f.write_str("Please correct the highlighted fields."),
		}
	}
}

impl std::error::Error for ValidationErrors {}

/// The raw contents of the progress form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressDraft {
	pub course_name: String,
	pub current_module: String,
	pub hours_spent: String,
	pub percentage: String,
	pub date: String,
	pub notes: String,
}

/// A draft that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidEntry {
	pub course_name: String,
	pub current_module: String,
	pub hours_spent: f64,
	pub percentage: u8,
	pub date: Date,
	pub note: Option<String>,
}

impl ProgressDraft {
	/// A blank form for a course that has not been chosen yet.
	pub fn blank(today: Date) -> Self {
		Self {
			date: format_day(today),
			..Default::default()
		}
	}

	/// The form for `course_name`, pre-filled from its stored entry if there is one.
	/// The date falls back to `today` when the entry has no readable timestamp.
	pub fn for_course(course_name: &str, existing: Option<&CourseProgress>, today: Date) -> Self {
		let Some(entry) = existing else {
			return Self {
				course_name: course_name.to_owned(),
				..Self::blank(today)
			};
		};
		Self {
			course_name: course_name.to_owned(),
			current_module: entry.current_module.clone(),
			hours_spent: entry.hours_spent.to_string(),
			percentage: entry.percentage.to_string(),
			date: format_day(entry.last_updated_date().unwrap_or(today)),
			notes: entry.note.clone().unwrap_or_default(),
		}
	}

	pub fn validate(&self) -> Result<ValidEntry, ValidationErrors> {
		let mut errors = ValidationErrors::default();
		let mut required = |field: Field, value: &str| -> Option<String> {
			let value = value.trim();
			if value.is_empty() {
				errors.insert(field, FieldError::Required);
				return None;
			}
			Some(value.to_owned())
		};
		// the name is the stored key, so only its emptiness is judged on the trimmed text
		let course_name = required(Field::CourseName, &self.course_name).map(|_| self.course_name.clone());
		let current_module = required(Field::CurrentModule, &self.current_module);
		let hours_spent = required(Field::HoursSpent, &self.hours_spent);
		let percentage = required(Field::Percentage, &self.percentage);
		let date = required(Field::Date, &self.date);

		let hours_spent = hours_spent.and_then(|text| match text.parse::<f64>() {
			Ok(hours) if hours.is_finite() && hours >= 0.0 => Some(hours),
			_ => {
				errors.insert(Field::HoursSpent, FieldError::InvalidHours);
				None
			}
		});
		let percentage = percentage.and_then(|text| match text.parse::<u8>() {
			Ok(percentage) if percentage <= 100 => Some(percentage),
			_ => {
				errors.insert(Field::Percentage, FieldError::InvalidPercentage);
				None
			}
		});
		let date = date.and_then(|text| match parse_input_day(&text) {
			Some(date) => Some(date),
			None => {
				errors.insert(Field::Date, FieldError::InvalidDate);
				None
			}
		});

		match (course_name, current_module, hours_spent, percentage, date) {
			(Some(course_name), Some(current_module), Some(hours_spent), Some(percentage), Some(date)) => {
				let note = Some(self.notes.trim().to_owned()).filter(|note| !note.is_empty());
				Ok(ValidEntry {
					course_name,
					current_module,
					hours_spent,
					percentage,
					date,
					note,
				})
			}
			_ => Err(errors),
		}
	}
}

impl ValidEntry {
	/// The stored form of this entry, stamped with `now`.
	pub fn into_progress(self, now: OffsetDateTime) -> (String, CourseProgress) {
		let entry = CourseProgress {
			current_module: self.current_module,
			percentage: self.percentage,
			hours_spent: self.hours_spent,
			note: self.note,
			last_updated: Some(format_timestamp(now)),
		};
		(self.course_name, entry)
	}
}

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
	#[error("{0}")]
	Invalid(ValidationErrors),
	#[error("You are not logged in. Please log in to update progress.")]
	NotLoggedIn,
	#[error("Failed to save progress. Please try again. ({0})")]
	Storage(#[from] StorageError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Submitted {
	pub course_name: String,
	/// False when an existing entry was replaced.
	pub created: bool,
}

/// Validates `draft` and, only if it is valid, writes it over the stored entry for its course.
pub fn submit(store: &Store, draft: &ProgressDraft, now: OffsetDateTime) -> Result<Submitted, SubmitError> {
	let entry = draft.validate().map_err(SubmitError::Invalid)?;
	let Some(mut user) = store.read::<UserRecord>() else {
		return Err(SubmitError::NotLoggedIn);
	};
	let (course_name, entry) = entry.into_progress(now);
	let replaced = user.progress.upsert(course_name.clone(), entry);
	store.write(&user)?;
	log::info!(target: "progress", "saved progress for {course_name:?}");
	Ok(Submitted {
		course_name,
		created: !replaced,
	})
}
