//! Default node factory for blot definitions.

use folio_primitives::{Document, NodeId};
use serde_json::Value;

use crate::def::BlotDef;
use crate::error::{RegistryError, Result};

/// Creates an element for `def`, choosing among its tags by `value`.
///
/// With several tags, a number `n` (or a string holding one) selects tag
/// `n - 1` and a string equal to one of the tags selects that tag; anything
/// else falls back to the first tag. The declared class, if any, is set on
/// the new element.
pub fn create_element(def: &BlotDef, doc: &mut dyn Document, value: Option<&Value>) -> Result<NodeId> {
	let tags = def.tags();
	let Some(first) = tags.first().map(|tag| &**tag) else {
		return Err(RegistryError::MissingTagName {
			name: def.name().to_owned(),
		});
	};
	let tag = if tags.len() > 1 {
		select_tag(tags, value).unwrap_or(first)
	} else {
		first
	};

	let node = doc.create_element(tag);
	if let Some(class) = def.class_name() {
		doc.set_attribute(node, "class", class)?;
	}
	Ok(node)
}

fn select_tag<'a>(tags: &'a [Box<str>], value: Option<&Value>) -> Option<&'a str> {
	match value? {
		Value::Number(n) => nth_tag(tags, n.as_u64()?),
		Value::String(s) => match s.parse::<u64>() {
			Ok(n) if n.to_string() == *s => nth_tag(tags, n),
			_ => tags.iter().find(|tag| tag.eq_ignore_ascii_case(s)).map(|tag| &**tag),
		},
		_ => None,
	}
}

fn nth_tag(tags: &[Box<str>], position: u64) -> Option<&str> {
	let index = usize::try_from(position.checked_sub(1)?).ok()?;
	tags.get(index).map(|tag| &**tag)
}
