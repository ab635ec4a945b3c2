//! Include guard names.

/// Derive an include guard identifier from an output filename.
///
/// Letters are uppercased and every run of other characters becomes a single
/// `_`, so `out/assets.gen.h` gives `_OUT_ASSETS_GEN_H`. The result always
/// starts with `_` and only contains `A-Z` and `_`.
pub fn guard_name(filename: &str) -> String {
    let mut guard = String::with_capacity(filename.len() + 1);
    guard.push('_');

    for c in filename.chars() {
        if c.is_ascii_alphabetic() {
            guard.push(c.to_ascii_uppercase());
        } else if !guard.ends_with('_') {
            guard.push('_');
        }
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_filename() {
        assert_eq!(guard_name("assets.gen.h"), "_ASSETS_GEN_H");
    }

    #[test]
    fn test_path_separators_collapse() {
        assert_eq!(guard_name("./build//out/Assets.h"), "_BUILD_OUT_ASSETS_H");
        assert_eq!(guard_name("C:\\game\\assets.h"), "_C_GAME_ASSETS_H");
    }

    #[test]
    fn test_digits_are_not_letters() {
        assert_eq!(guard_name("level2_tiles.h"), "_LEVEL_TILES_H");
    }

    #[test]
    fn test_empty_filename() {
        assert_eq!(guard_name(""), "_");
    }

    #[test]
    fn test_non_ascii_collapses() {
        assert_eq!(guard_name("ünïcode.h"), "_N_CODE_H");
    }

    #[test]
    fn test_guard_shape() {
        for name in ["a.h", "__x__", "123", "../../deep/path/file.hpp", "x y\tz"] {
            let guard = guard_name(name);
            assert!(guard.starts_with('_'));
            assert!(!guard.contains("__"), "{} -> {}", name, guard);
            assert!(guard.chars().all(|c| c == '_' || c.is_ascii_uppercase()));
            assert_eq!(guard, guard_name(name));
        }
    }
}
