use crate::scope::Scope;

/// Descriptor of an attribute-style format handler.
///
/// The scope always carries the attribute type bit; only the level bits of a
/// configured scope are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributorDef {
	attr_name: Box<str>,
	key_name: Option<Box<str>>,
	scope: Scope,
	whitelist: Option<Vec<String>>,
}

impl AttributorDef {
	/// Creates a handler for `attr_name`, addressable by `key_name` when given.
	pub fn new(attr_name: impl Into<Box<str>>, key_name: Option<&str>) -> Self {
		Self {
			attr_name: attr_name.into(),
			key_name: key_name.map(Into::into),
			scope: Scope::ATTRIBUTE,
			whitelist: None,
		}
	}

	pub fn with_scope(mut self, scope: Scope) -> Self {
		self.scope = scope.level() | Scope::ATTRIBUTE.kind();
		self
	}

	pub fn with_whitelist<I, S>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.whitelist = Some(values.into_iter().map(Into::into).collect());
		self
	}

	#[inline]
	pub fn attr_name(&self) -> &str {
		&self.attr_name
	}

	#[inline]
	pub fn key_name(&self) -> Option<&str> {
		self.key_name.as_deref()
	}

	#[inline]
	pub fn scope(&self) -> Scope {
		self.scope
	}

	pub fn whitelist(&self) -> Option<&[String]> {
		self.whitelist.as_deref()
	}

	/// Returns true if `value` may be applied by this handler. Quotes are
	/// ignored, so `"'Serif'"` matches a whitelisted `Serif`.
	pub fn can_add(&self, value: &str) -> bool {
		let Some(allowed) = &self.whitelist else {
			return true;
		};
		let unquoted = value.replace(['"', '\''], "");
		allowed.iter().any(|v| *v == unquoted)
	}
}

/// Attributor declared as data.
///
/// ```json
/// {"attr-name": "align", "key-name": "align", "scope": "block", "whitelist": ["right", "center"]}
/// ```
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AttributorConfig {
	pub attr_name: String,
	#[serde(default)]
	pub key_name: Option<String>,
	#[serde(default)]
	pub scope: Option<Scope>,
	#[serde(default)]
	pub whitelist: Option<Vec<String>>,
}

#[cfg(feature = "serde")]
impl From<AttributorConfig> for AttributorDef {
	fn from(config: AttributorConfig) -> Self {
		let mut def = Self::new(config.attr_name, config.key_name.as_deref());
		if let Some(scope) = config.scope {
			def = def.with_scope(scope);
		}
		def.whitelist = config.whitelist;
		def
	}
}
