use log::Level;

/// Destination of fully composed progress lines.
pub trait ProgressSink: Send {
	fn write_line(&mut self, level: Level, line: &str);
}

/// Builds one progress line out of fragments and hands it to the sink only
/// once it is complete, so a line is never interleaved with another.
pub struct LineLogger<S: ProgressSink> {
	sink:   S,
	buffer: String,
}

impl<S: ProgressSink> LineLogger<S> {
	pub fn new(sink: S) -> Self {
		Self {
			sink,
			buffer: String::new(),
		}
	}

	/// Writes a standalone line. Pending fragments are left untouched.
	pub fn log(&mut self, level: Level, message: &str) {
		self.sink.write_line(level, message);
	}

	pub fn append(&mut self, fragment: &str) {
		self.buffer.push_str(fragment);
	}

	/// Appends the last fragment, writes the whole line and clears the buffer.
	pub fn flush(&mut self, level: Level, fragment: &str) {
		self.buffer.push_str(fragment);
		let line = std::mem::take(&mut self.buffer);
		self.sink.write_line(level, &line);
	}

	pub fn sink(&self) -> &S {
		&self.sink
	}
}

impl ProgressSink for Vec<(Level, String)> {
	fn write_line(&mut self, level: Level, line: &str) {
		self.push((level, line.to_string()));
	}
}
