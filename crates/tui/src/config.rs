/// Static text rendered around the search widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Placeholder shown in the empty search input.
	pub placeholder: String,
	/// Title of the panel showing the selected answer.
	pub answer_title: String,
	/// Title of the popular-questions panel.
	pub popular_title: String,
	/// Title of the results dropdown.
	pub results_title: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			placeholder: "ابحث هنا ...".to_string(),
			answer_title: ":الإجابة".to_string(),
			popular_title: "الأسئلة الشائعة".to_string(),
			results_title: "النتائج".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_answer_title(mut self, title: impl Into<String>) -> Self {
		self.answer_title = title.into();
		self
	}

	#[must_use]
	pub fn with_popular_title(mut self, title: impl Into<String>) -> Self {
		self.popular_title = title.into();
		self
	}
}
