//! Two-axis scope masks used to filter registry matches.
//!
//! The low two bits select the type category (attribute or blot), the high two
//! bits the structural level (inline or block). A query admits a definition
//! only when the requested scope shares a bit with the declared scope on both
//! axes.


use std::fmt;
use std::str::FromStr;

bitflags::bitflags! {
	/// Structural level × type category mask.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct Scope: u8 {
		/// Type axis mask.
		const TYPE = 0b0011;
		/// Level axis mask.
		const LEVEL = 0b1100;
		/// Attribute type, any level.
		const ATTRIBUTE = 0b1101;
		/// Blot type, any level.
		const BLOT = 0b1110;
		/// Inline level, any type.
		const INLINE = 0b0111;
		/// Block level, any type.
		const BLOCK = 0b1011;
		const BLOCK_BLOT = 0b1010;
		const INLINE_BLOT = 0b0110;
		const BLOCK_ATTRIBUTE = 0b1001;
		const INLINE_ATTRIBUTE = 0b0101;
		const ANY = 0b1111;
	}
}

const BLOCK_LEVEL_BIT: u8 = 0b1000;
const INLINE_LEVEL_BIT: u8 = 0b0100;

const NAMED: &[(&str, Scope)] = &[
	("any", Scope::ANY),
	("type", Scope::TYPE),
	("level", Scope::LEVEL),
	("attribute", Scope::ATTRIBUTE),
	("blot", Scope::BLOT),
	("inline", Scope::INLINE),
	("block", Scope::BLOCK),
	("block-blot", Scope::BLOCK_BLOT),
	("inline-blot", Scope::INLINE_BLOT),
	("block-attribute", Scope::BLOCK_ATTRIBUTE),
	("inline-attribute", Scope::INLINE_ATTRIBUTE),
];

impl Scope {
	/// Bits on the level axis only.
	#[inline]
	pub const fn level(self) -> Self {
		Self::from_bits_retain(self.bits() & Self::LEVEL.bits())
	}

	/// Bits on the type axis only.
	#[inline]
	pub const fn kind(self) -> Self {
		Self::from_bits_retain(self.bits() & Self::TYPE.bits())
	}

	#[inline]
	pub const fn is_block_level(self) -> bool {
		self.bits() & BLOCK_LEVEL_BIT != 0
	}

	#[inline]
	pub const fn is_inline_level(self) -> bool {
		self.bits() & INLINE_LEVEL_BIT != 0
	}

	/// Returns true if a definition declared with `declared` passes a query
	/// made with `self`.
	#[inline]
	pub const fn admits(self, declared: Scope) -> bool {
		self.level().intersects(declared.level()) && self.kind().intersects(declared.kind())
	}

	/// Returns the canonical name of a named scope value.
	pub fn name(self) -> Option<&'static str> {
		NAMED.iter().find(|(_, s)| *s == self).map(|(name, _)| *name)
	}
}

/// Error returned when parsing an unknown scope name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scope `{0}`")]
pub struct ParseScopeError(pub String);

impl FromStr for Scope {
	type Err = ParseScopeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if let Some(&(_, scope)) = NAMED.iter().find(|(name, _)| name.eq_ignore_ascii_case(trimmed)) {
			return Ok(scope);
		}
		trimmed
			.strip_prefix("0b")
			.and_then(|bits| u8::from_str_radix(bits, 2).ok())
			.and_then(Scope::from_bits)
			.ok_or_else(|| ParseScopeError(s.to_owned()))
	}
}

impl fmt::Display for Scope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => f.write_str(name),
			None => write!(f, "{:#06b}", self.bits()),
		}
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scope {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Scope {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
		raw.parse().map_err(serde::de::Error::custom)
	}
}
