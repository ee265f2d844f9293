use super::{CourseProgress, UserRecord};
use time::Date;

/// Where a learner is in a course, derived from its completion percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
	NotStarted,
	InProgress,
	Completed,
}

impl Status {
	pub fn from_percentage(percentage: u8) -> Self {
		match percentage {
			0 => Self::NotStarted,
			100.. => Self::Completed,
			_ => Self::InProgress,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::NotStarted => "Not Started",
			Self::InProgress => "In Progress",
			Self::Completed => "Completed",
		}
	}

	pub fn css_class(self) -> &'static str {
		match self {
			Self::NotStarted => "status-not-started",
			Self::InProgress => "status-in-progress",
			Self::Completed => "status-completed",
		}
	}
}

impl std::fmt::Display for Status {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct CourseSummary {
	pub name: String,
	pub status: Status,
	pub percentage: u8,
	pub description: Option<String>,
	pub current_module: Option<String>,
	pub hours_spent: f64,
	pub last_updated: Option<Date>,
}

impl CourseSummary {
	pub fn new(name: &str, entry: &CourseProgress) -> Self {
		let current_module = Some(entry.current_module.clone()).filter(|module| !module.trim().is_empty());
		Self {
			name: name.to_owned(),
			status: Status::from_percentage(entry.percentage),
			percentage: entry.percentage,
			description: entry.note.clone(),
			current_module,
			hours_spent: entry.hours_spent,
			last_updated: entry.last_updated_date(),
		}
	}
}

/// Everything the user dashboard shows about a record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overview {
	pub courses: Vec<CourseSummary>,
	/// Mean of all course percentages, rounded; 0 when there are no courses.
	pub overall: u8,
}

impl Overview {
	pub fn of(user: &UserRecord) -> Self {
		let courses = user
			.progress
			.iter()
			.map(|(name, entry)| CourseSummary::new(name, entry))
			.collect::<Vec<_>>();
		Self {
			overall: overall_progress(courses.iter().map(|course| course.percentage)),
			courses,
		}
	}
}

pub fn overall_progress(percentages: impl IntoIterator<Item = u8>) -> u8 {
	let (total, count) = percentages
		.into_iter()
		.fold((0u32, 0u32), |(total, count), percentage| (total + percentage as u32, count + 1));
	if count == 0 {
		return 0;
	}
	(total as f64 / count as f64).round() as u8
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Progress;

	fn entry(percentage: u8) -> CourseProgress {
		CourseProgress {
			current_module: String::new(),
			percentage,
			hours_spent: 1.5,
			note: None,
			last_updated: None,
		}
	}

	#[test]
	fn status_boundaries() {
		for percentage in 0..=100u8 {
			let expected = match percentage {
				0 => Status::NotStarted,
				100 => Status::Completed,
				_ => Status::InProgress,
			};
			assert_eq!(Status::from_percentage(percentage), expected, "{percentage}");
		}
		assert_eq!(Status::InProgress.to_string(), "In Progress");
	}

	#[test]
	fn overall_is_rounded_mean() {
		assert_eq!(overall_progress(std::iter::empty()), 0);
		assert_eq!(overall_progress([50, 100]), 75);
		assert_eq!(overall_progress([0, 1]), 1);
		assert_eq!(overall_progress([33, 33, 34]), 33);
		assert_eq!(overall_progress([100, 100, 100]), 100);
	}

	#[test]
	fn overview_follows_record_order() {
		let user = UserRecord {
			username: "rohit".into(),
			progress: [("Rust".to_owned(), entry(50)), ("Go".to_owned(), entry(100))].into_iter().collect::<Progress>(),
			..Default::default()
		};
		let overview = Overview::of(&user);
		assert_eq!(overview.overall, 75);
		let names = overview.courses.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
		assert_eq!(names, vec!["Rust", "Go"]);
		assert_eq!(overview.courses[1].status, Status::Completed);
		assert_eq!(overview.courses[0].current_module, None);
		assert_eq!(Overview::of(&user), overview);
	}

	#[test]
	fn empty_record_has_zero_overall() {
		let overview = Overview::of(&UserRecord::default());
		assert!(overview.courses.is_empty());
		assert_eq!(overview.overall, 0);
	}
}
