use serde::{
	de::{MapAccess, Visitor},
	ser::SerializeMap,
	Deserialize, Deserializer, Serialize, Serializer,
};
use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

/// Progress a user has logged against a single course.
///
/// Stored records written by this app always use the flat shape below. Records handed
/// out by the login service wrap every value in a `{"S": ..}` / `{"N": ..}` attribute,
/// which is unwrapped on the way in so nothing past this boundary sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCourseProgress")]
pub struct CourseProgress {
	#[serde(rename = "current module")]
	pub current_module: String,
	/// Always within `0..=100`.
	pub percentage: u8,
	/// Never negative.
	#[serde(rename = "Hour spend")]
	pub hours_spent: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
	/// RFC 3339 timestamp of the last write.
	#[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<String>,
}

impl CourseProgress {
	/// The calendar day of the last update, if the stored timestamp can be read.
	pub fn last_updated_date(&self) -> Option<Date> {
		parse_day(self.last_updated.as_deref()?)
	}
}

static DAY_FORMAT: &[time::format_description::FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Reads either a full RFC 3339 timestamp or a bare `YYYY-MM-DD` day.
pub fn parse_day(value: &str) -> Option<Date> {
	let value = value.trim();
	if let Ok(timestamp) = OffsetDateTime::parse(value, &Rfc3339) {
		return Some(timestamp.date());
	}
	Date::parse(value, DAY_FORMAT).ok()
}

/// Formats a day the way `<input type="date">` expects it.
pub fn format_day(date: Date) -> String {
	date.format(DAY_FORMAT).unwrap_or_default()
}

/// Parses the value of a date input. Rejects days that do not exist (e.g. `2024-02-30`).
pub fn parse_input_day(value: &str) -> Option<Date> {
	Date::parse(value.trim(), DAY_FORMAT).ok()
}

pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
	timestamp.format(&Rfc3339).unwrap_or_default()
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawCourseProgress {
	#[serde(rename = "current module")]
	current_module: Option<Attribute>,
	percentage: Option<Attribute>,
	#[serde(rename = "Hour spend")]
	hours_spent: Option<Attribute>,
	note: Option<Attribute>,
	#[serde(rename = "lastUpdated")]
	last_updated: Option<Attribute>,
}

/// A single stored value, in any of the shapes that have been written for it.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Attribute {
	Text {
		#[serde(rename = "S")]
		text: String,
	},
	Number {
		#[serde(rename = "N")]
		number: String,
	},
	Plain(String),
	Float(f64),
}

impl Attribute {
	fn into_text(self) -> String {
		match self {
			Self::Text { text } => text,
			Self::Number { number } => number,
			Self::Plain(text) => text,
			Self::Float(value) => value.to_string(),
		}
	}

	fn as_number(&self) -> Option<f64> {
		let value = match self {
			Self::Float(value) => *value,
			Self::Text { text: value } | Self::Number { number: value } | Self::Plain(value) => {
				value.trim().parse::<f64>().ok()?
			}
		};
		value.is_finite().then_some(value)
	}
}

fn non_empty(attribute: Option<Attribute>) -> Option<String> {
	let text = attribute?.into_text();
	match text.trim().is_empty() {
		true => None,
		false => Some(text),
	}
}

impl From<RawCourseProgress> for CourseProgress {
	fn from(raw: RawCourseProgress) -> Self {
		let percentage = raw.percentage.as_ref().and_then(Attribute::as_number);
		let hours_spent = raw.hours_spent.as_ref().and_then(Attribute::as_number);
		Self {
			current_module: raw.current_module.map(Attribute::into_text).unwrap_or_default(),
			percentage: percentage.map(|value| value.trunc().clamp(0.0, 100.0) as u8).unwrap_or(0),
			hours_spent: hours_spent.filter(|hours| *hours >= 0.0).unwrap_or(0.0),
			note: non_empty(raw.note),
			last_updated: non_empty(raw.last_updated),
		}
	}
}

/// Course name to progress, in the order the courses were first recorded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Progress(Vec<(String, CourseProgress)>);

impl Progress {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(&self, course_name: &str) -> Option<&CourseProgress> {
		self.0.iter().find(|(name, _)| name == course_name).map(|(_, entry)| entry)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &CourseProgress)> {
		self.0.iter().map(|(name, entry)| (name.as_str(), entry))
	}

	/// Inserts or wholly replaces the entry for `course_name`.
	/// A replaced entry keeps its position. Returns true when an entry was replaced.
	pub fn upsert(&mut self, course_name: impl Into<String>, entry: CourseProgress) -> bool {
		let course_name = course_name.into();
		match self.0.iter_mut().find(|(name, _)| *name == course_name) {
			Some((_, existing)) => {
				*existing = entry;
				true
			}
			None => {
				self.0.push((course_name, entry));
				false
			}
		}
	}

	/// Treats a `null` progress map the same as a missing one.
	pub(crate) fn deserialize_nullable<'de, D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(Option::<Self>::deserialize(deserializer)?.unwrap_or_default())
	}
}

impl FromIterator<(String, CourseProgress)> for Progress {
	fn from_iter<T: IntoIterator<Item = (String, CourseProgress)>>(iter: T) -> Self {
		let mut progress = Self::default();
		for (name, entry) in iter {
			progress.upsert(name, entry);
		}
		progress
	}
}

impl Serialize for Progress {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (name, entry) in &self.0 {
			map.serialize_entry(name, entry)?;
		}
		map.end()
	}
}

impl<'de> Deserialize<'de> for Progress {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct ProgressVisitor;
		impl<'de> Visitor<'de> for ProgressVisitor {
			type Value = Progress;

			fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
				f.write_str("a map of course names to progress entries")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
				let mut progress = Progress::default();
				while let Some((name, entry)) = access.next_entry::<String, CourseProgress>()? {
					progress.upsert(name, entry);
				}
				Ok(progress)
			}
		}
		deserializer.deserialize_map(ProgressVisitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use time::macros::{date, datetime};

	#[test]
	fn tagged_attributes_are_unwrapped() {
		let entry: CourseProgress = serde_json::from_str(
			r#"{
				"lastUpdated": {"S": "2025-06-01T10:00:00.000Z"},
				"current module": {"S": "Closures"},
				"percentage": {"N": "40"},
				"Hour spend": {"N": "12.5"},
				"note": {"S": "going well"}
			}"#,
		)
		.unwrap();
		assert_eq!(entry.current_module, "Closures");
		assert_eq!(entry.percentage, 40);
		assert_eq!(entry.hours_spent, 12.5);
		assert_eq!(entry.note.as_deref(), Some("going well"));
		assert_eq!(entry.last_updated_date(), Some(date!(2025 - 06 - 01)));
	}

	#[test]
	fn flat_shape_round_trips_through_storage() {
		let entry = CourseProgress {
			current_module: "Traits".into(),
			percentage: 100,
			hours_spent: 3.0,
			note: None,
			last_updated: Some("2025-06-01T10:00:00Z".into()),
		};
		let text = serde_json::to_string(&entry).unwrap();
		assert!(text.contains(r#""current module":"Traits""#));
		assert!(text.contains(r#""Hour spend":3.0"#));
		assert!(!text.contains("note"));
		let parsed: CourseProgress = serde_json::from_str(&text).unwrap();
		assert_eq!(parsed, entry);
	}

	#[test]
	fn out_of_range_numbers_are_normalized() {
		let entry: CourseProgress =
			serde_json::from_str(r#"{"percentage": "180", "Hour spend": -4, "note": {"S": "  "}}"#).unwrap();
		assert_eq!(entry.percentage, 100);
		assert_eq!(entry.hours_spent, 0.0);
		assert_eq!(entry.note, None);
		assert_eq!(entry.current_module, "");

		let entry: CourseProgress = serde_json::from_str(r#"{"percentage": {"N": "abc"}}"#).unwrap();
		assert_eq!(entry.percentage, 0);
	}

	#[test]
	fn progress_keeps_insertion_order() {
		let progress: Progress = serde_json::from_str(
			r#"{"Zig": {"percentage": 1}, "Ada": {"percentage": 2}, "Rust": {"percentage": 3}}"#,
		)
		.unwrap();
		let names = progress.iter().map(|(name, _)| name).collect::<Vec<_>>();
		assert_eq!(names, vec!["Zig", "Ada", "Rust"]);

		let text = serde_json::to_string(&progress).unwrap();
		let zig = text.find("Zig").unwrap();
		let ada = text.find("Ada").unwrap();
		assert!(zig < ada);
	}

	#[test]
	fn upsert_replaces_in_place() {
		let mut progress = Progress::default();
		let entry = |percentage| CourseProgress {
			current_module: String::new(),
			percentage,
			hours_spent: 0.0,
			note: None,
			last_updated: None,
		};
		assert!(!progress.upsert("A", entry(10)));
		assert!(!progress.upsert("B", entry(20)));
		assert!(progress.upsert("A", entry(30)));
		assert_eq!(progress.len(), 2);
		assert_eq!(progress.iter().next().map(|(name, e)| (name, e.percentage)), Some(("A", 30)));
	}

	#[test]
	fn day_parsing() {
		assert_eq!(parse_day("2024-02-29"), Some(date!(2024 - 02 - 29)));
		assert_eq!(parse_day("2024-03-01T23:30:00+02:00"), Some(date!(2024 - 03 - 01)));
		assert_eq!(parse_day("yesterday"), None);
		assert_eq!(parse_input_day("2023-02-29"), None);
		assert_eq!(format_day(date!(2025 - 01 - 09)), "2025-01-09");
		assert_eq!(format_timestamp(datetime!(2025-01-09 08:00 UTC)), "2025-01-09T08:00:00Z");
	}
}
