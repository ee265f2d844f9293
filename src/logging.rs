//! Routes the `log` facade to the browser console, or to the terminal when running natively.

use log::LevelFilter;

#[derive(Debug, Clone, Copy)]
pub struct Config {
	level: LevelFilter,
	// only the console logger reads this
	#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
	prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		let level = match cfg!(debug_assertions) {
			true => LevelFilter::Debug,
			false => LevelFilter::Info,
		};
		Self {
			level,
			prefer_target: false,
		}
	}
}

impl Config {
	pub fn with_level(mut self, level: LevelFilter) -> Self {
		self.level = level;
		self
	}

	/// Prefix each line with the record's target instead of its module path.
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}
}

/// Installs the logger. Later calls are ignored.
pub fn init(config: Config) {
	#[cfg(target_family = "wasm")]
	{
		let logger = console::ConsoleLogger { config };
		if log::set_boxed_logger(Box::new(logger)).is_ok() {
			log::set_max_level(config.level);
		}
	}
	#[cfg(not(target_family = "wasm"))]
	{
		let _ = simplelog::TermLogger::init(
			config.level,
			simplelog::Config::default(),
			simplelog::TerminalMode::Mixed,
			simplelog::ColorChoice::Auto,
		);
	}
}

#[cfg(target_family = "wasm")]
mod console {
	use super::Config;
	use log::{Level, Log, Metadata, Record};
	use wasm_bindgen::JsValue;

	pub(super) struct ConsoleLogger {
		pub(super) config: Config,
	}

	impl Log for ConsoleLogger {
		fn enabled(&self, metadata: &Metadata) -> bool {
			metadata.level() <= self.config.level
		}

		fn log(&self, record: &Record) {
			if !self.enabled(record.metadata()) {
				return;
			}
			let origin = match self.config.prefer_target {
				true => record.target(),
				false => record.module_path().unwrap_or_else(|| record.target()),
			};
			let line = JsValue::from_str(&format!("[{origin}] {}", record.args()));
			match record.level() {
				Level::Error => web_sys::console::error_1(&line),
				Level::Warn => web_sys::console::warn_1(&line),
				Level::Info => web_sys::console::info_1(&line),
				Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
			}
		}

		fn flush(&self) {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builder_sets_fields() {
		let config = Config::default().with_level(LevelFilter::Warn).prefer_target();
		assert_eq!(config.level, LevelFilter::Warn);
		assert!(config.prefer_target);
		assert!(!Config::default().prefer_target);
	}
}
