//! Qualified name to manifest file mapping.
//!
//! * `foo` -> `foo/manifests/init.pp`
//! * `foo::bar` -> `foo/manifests/bar.pp`
//! * `foo::bar::baz` -> `foo/manifests/bar/baz.pp`

use std::path::PathBuf;

use super::QualifiedName;

pub const MANIFESTS_DIR: &str = "manifests";
pub const MANIFEST_EXTENSION: &str = "pp";
const INIT_STEM: &str = "init";

/// Relative path of the manifest that should declare `name`.
pub fn manifest_path(name: &QualifiedName) -> PathBuf {
    let mut segments = name.segments();
    let mut path = PathBuf::from(segments.next().unwrap_or_default());
    path.push(MANIFESTS_DIR);

    let nested: Vec<&str> = segments.collect();
    let stem = match nested.split_last() {
        Some((stem, dirs)) => {
            path.extend(dirs);
            *stem
        }
        None => INIT_STEM,
    };
    path.push(format!("{stem}.{MANIFEST_EXTENSION}"));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::Path;

    fn map(raw: &str) -> PathBuf {
        manifest_path(&QualifiedName::new(raw).unwrap())
    }

    #[test]
    fn single_segment_maps_to_init() {
        assert_eq!(map("foo"), Path::new("foo/manifests/init.pp"));
    }

    #[test]
    fn two_segments_map_to_stem() {
        assert_eq!(map("foo::bar"), Path::new("foo/manifests/bar.pp"));
    }

    #[test]
    fn deeper_segments_become_directories() {
        assert_eq!(map("foo::bar::baz"), Path::new("foo/manifests/bar/baz.pp"));
    }

    #[test]
    fn init_segment_is_not_special() {
        assert_eq!(map("foo::init"), Path::new("foo/manifests/init.pp"));
    }

    fn segment() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,8}"
    }

    proptest! {
        #[test]
        fn module_is_top_level_and_last_segment_is_stem(
            segments in prop::collection::vec(segment(), 2..6)
        ) {
            let path = map(&segments.join("::"));
            let components: Vec<String> = path
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();

            prop_assert_eq!(&components[0], &segments[0]);
            prop_assert_eq!(components[1].as_str(), MANIFESTS_DIR);
            prop_assert_eq!(&components[2..components.len() - 1], &segments[1..segments.len() - 1]);
            prop_assert_eq!(
                components.last().unwrap(),
                &format!("{}.{}", segments.last().unwrap(), MANIFEST_EXTENSION)
            );
        }

        #[test]
        fn mapping_is_always_relative(segments in prop::collection::vec(segment(), 1..6)) {
            prop_assert!(map(&segments.join("::")).is_relative());
        }
    }
}
