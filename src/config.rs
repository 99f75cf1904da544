use std::path::PathBuf;

/// The puzzle input, relative to the working directory.
pub const INPUT_PATH: &str = "input.txt";

/// How many full passes over the changes the repeat scan may make before
/// giving up. Real puzzle inputs repeat within a few hundred.
pub const DEFAULT_MAX_CYCLES: usize = 100_000;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub input_path: PathBuf,
    pub max_cycles: usize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            input_path: PathBuf::from(INPUT_PATH),
            max_cycles: DEFAULT_MAX_CYCLES,
        }
    }
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.input_path, PathBuf::from("input.txt"));
    assert_eq!(settings.max_cycles, DEFAULT_MAX_CYCLES);
}
