pub(crate) trait PushStrExt {
	fn add<S: Into<String>>(&mut self, s: S);
}

impl PushStrExt for Vec<String> {
	fn add<S: Into<String>>(&mut self, s: S) {
		self.push(s.into());
	}
}
