use folio_primitives::AccessError;

/// Registry error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The definition does not have a registrable shape.
	#[error("invalid definition `{name}`: {reason}")]
	InvalidDefinition { name: String, reason: &'static str },

	/// Abstract base definitions are never registered.
	#[error("cannot register abstract definition")]
	AbstractRegistration,

	/// No blot definition resolves for the creation input.
	#[error("unable to create {input} blot")]
	UnresolvedBlot { input: String },

	/// The default element factory needs at least one tag.
	#[error("blot definition `{name}` is missing a tag name")]
	MissingTagName { name: String },

	/// The definition registered under `name` does not construct `expected`.
	#[error("definition `{name}` does not construct {expected}")]
	TypeMismatch { name: String, expected: &'static str },

	#[error(transparent)]
	Access(#[from] AccessError),
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
