use super::internal::*;
use thiserror::Error;

/// Why a bake set cannot be baked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationKind {
	NoLowPoly,
	NoUvMap,
	CageMismatch,
	DuplicateSetName,
}

/// Everything that stops a bake. None of these are retried.
#[derive(Debug, Error)]
pub enum BakeError {
	#[error("unknown bake mode `{key}`, expected one of: {}", valid.join(", "))]
	UnknownMode { key: String, valid: Vec<&'static str> },

	#[error("invalid bake request: {0}")]
	InvalidRequest(String),

	#[error("{}", validation_message(*kind, set, object.as_deref()))]
	Validation {
		kind: ValidationKind,
		set: String,
		object: Option<String>,
	},

	#[error("object `{object}` has no material slot to hold the bake target")]
	NoMaterialSlot { object: String },

	#[error("material `{name}` not found in material pack {pack}")]
	AssetImport { name: String, pack: String },

	#[error("bake of `{object}` in set `{set}` failed: {cause}")]
	BakeExecution {
		set: String,
		object: String,
		#[source]
		cause: BackendError,
	},
}

fn validation_message(kind: ValidationKind, set: &str, object: Option<&str>) -> String {
	let object = object.unwrap_or("?");
	match kind {
		ValidationKind::NoLowPoly => format!("no low poly object selected for {set}"),
		ValidationKind::NoUvMap => format!("low poly object `{object}` in {set} has no UV map"),
		ValidationKind::CageMismatch => format!("number of cage objects does not match the number of low poly objects in {set}"),
		ValidationKind::DuplicateSetName => format!("more than one bake set is named {set}"),
	}
}

impl BakeError {
	pub fn validation(kind: ValidationKind, set: &str) -> Self {
		Self::Validation {
			kind,
			set: set.to_owned(),
			object: None,
		}
	}

	/// Report kind, as shown to the user.
	pub fn kind(&self) -> &'static str {
		match self {
			BakeError::UnknownMode { .. } | BakeError::InvalidRequest(_) | BakeError::Validation { .. } => "ERROR_INVALID_INPUT",
			BakeError::NoMaterialSlot { .. } => "ERROR_INVALID_CONTEXT",
			BakeError::AssetImport { .. } | BakeError::BakeExecution { .. } => "ERROR",
		}
	}

	pub fn report(&self) -> Report {
		Report::new(self.kind(), self.to_string())
	}

	pub fn validation_kind(&self) -> Option<ValidationKind> {
		match self {
			BakeError::Validation { kind, .. } => Some(*kind),
			_ => None,
		}
	}
}
