//! Declaration Name Derivation
//!
//! Nested object declarations are named after the path of property keys that
//! leads to them: `["dataset", "subjects"]` becomes `DatasetSubjects`.
//!
//! Names are not checked for uniqueness. Two different paths that flatten to the
//! same identifier (`a_b/c` and `a/b_c` both give `ABC`) produce two
//! declarations with the same name.
//!
//! Names are not checked for validity either. Characters other than `_` pass
//! through, so `dim-info` under `context` gives `ContextDim-info`. A key made
//! only of underscores contributes no fragment and its object takes the
//! parent's name.

use std::fmt;

/// Property-key path from a root entry down to a nested object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePath {
    segments: Vec<String>,
}

impl NamePath {
    /// Path containing a single root entry
    pub fn root(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    /// A new path with `segment` appended
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Declaration name for this path
    pub fn type_name(&self) -> String {
        derive_name(&self.segments)
    }
}

impl fmt::Display for NamePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Derive a PascalCase identifier from path segments.
///
/// Each segment is split on `_`, empty fragments are discarded and only the
/// first character of each fragment is uppercased; the rest passes through.
pub fn derive_name<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .flat_map(|segment| segment.as_ref().split('_'))
        .filter(|fragment| !fragment.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_name_examples() {
        assert_eq!(derive_name(&["dim_info"]), "DimInfo");
        assert_eq!(derive_name(&["dataset"]), "Dataset");
        assert_eq!(derive_name(&["Dataset_nifti_PixDim"]), "DatasetNiftiPixDim");
    }

    #[test]
    fn test_derive_name_concatenates_path() {
        assert_eq!(derive_name(&["dataset", "nifti_header", "dim_info"]), "DatasetNiftiHeaderDimInfo");
    }

    #[test]
    fn test_derive_name_skips_empty_fragments() {
        assert_eq!(derive_name(&["__private__", "x"]), "PrivateX");
        assert_eq!(derive_name(&["_"]), "");
    }

    #[test]
    fn test_derive_name_passes_other_characters_through() {
        assert_eq!(derive_name(&["context", "dim-info"]), "ContextDim-info");
        assert_eq!(derive_name(&["context", "0th"]), "Context0th");
    }

    #[test]
    fn test_underscore_segment_adds_nothing() {
        assert_eq!(derive_name(&["context", "_"]), derive_name(&["context"]));
        assert_eq!(NamePath::root("context").child("__").type_name(), "Context");
    }

    #[test]
    fn test_derive_name_keeps_inner_case() {
        assert_eq!(derive_name(&["sidecar", "RepetitionTime"]), "SidecarRepetitionTime");
        assert_eq!(derive_name(&["nifti_header", "qform_code"]), "NiftiHeaderQformCode");
    }

    #[test]
    fn test_colliding_paths_share_a_name() {
        let a = NamePath::root("a_b").child("c");
        let b = NamePath::root("a").child("b_c");
        assert_eq!(a.type_name(), b.type_name());
    }

    #[test]
    fn test_name_path_display() {
        let path = NamePath::root("dataset").child("subjects");
        assert_eq!(path.to_string(), "dataset.subjects");
        assert_eq!(path.segments().len(), 2);
    }
}
