use super::internal::*;

/// A user-facing notification: a kind (e.g. `ERROR_INVALID_INPUT`) and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
	pub kind: &'static str,
	pub message: String,
}

impl Report {
	pub const INFO: &'static str = "INFO";

	pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
		Self { kind, message: message.into() }
	}

	pub fn is_error(&self) -> bool {
		self.kind.starts_with("ERROR")
	}
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.kind, self.message)
	}
}

/// Reports shown to the user after a bake.
/// Everything written here is also logged.
#[derive(Default)]
pub struct Reports {
	lines: Mutex<Vec<Report>>,
}

impl Reports {
	const MAX_LINES: usize = 48;

	pub fn new() -> Self {
		Self::default()
	}

	pub fn info(&self, message: impl Into<String>) {
		self.push(Report::new(Report::INFO, message))
	}

	pub fn error(&self, err: &BakeError) {
		self.push(err.report())
	}

	pub fn push(&self, report: Report) {
		match report.kind {
			Report::INFO => log::info!("{}", report.message),
			_ => log::error!("{report}"),
		}

		let mut lines = self.lines.lock().expect("poisoned");
		lines.push(report);
		if lines.len() > Self::MAX_LINES {
			lines.remove(0);
		}
	}

	pub fn lines(&self) -> Vec<Report> {
		self.lines.lock().expect("poisoned").clone()
	}

	pub fn has_errors(&self) -> bool {
		self.lines.lock().expect("poisoned").iter().any(Report::is_error)
	}
}

impl fmt::Display for Reports {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let lines = self.lines.lock().expect("poisoned");
		for (i, report) in lines.iter().enumerate() {
			if i != 0 {
				writeln!(f)?;
			}
			write!(f, "{report}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn keeps_most_recent_lines() {
		let reports = Reports::new();
		for i in 0..(Reports::MAX_LINES + 5) {
			reports.info(format!("line {i}"));
		}
		let lines = reports.lines();
		assert_eq!(lines.len(), Reports::MAX_LINES);
		assert_eq!(lines[0].message, "line 5");
		assert!(!reports.has_errors());
	}

	#[test]
	fn errors_carry_their_kind() {
		let reports = Reports::new();
		reports.error(&BakeError::NoMaterialSlot { object: "crate_low".into() });
		assert!(reports.has_errors());
		assert_eq!(reports.lines()[0].kind, "ERROR_INVALID_CONTEXT");
		assert!(reports.to_string().contains("crate_low"));
	}
}
