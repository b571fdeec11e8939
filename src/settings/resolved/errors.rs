use thiserror::Error;

use super::SettingSource;

#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid<V, R>(
		key: &'static str,
		value: V,
		origin: SettingSource,
		reason: R,
	) -> Self
	where
		V: Into<String>,
		R: Into<String>,
	{
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_names_key_origin_and_value() {
		let err = ConfigError::invalid(
			"logging.level",
			"loud",
			SettingSource::Environment("FAQZ__LOGGING__LEVEL"),
			"not a level",
		);
		insta::assert_snapshot!(
			err.to_string(),
			@"invalid value for logging.level from environment variable `FAQZ__LOGGING__LEVEL`: not a level (value: loud)"
		);
	}
}
