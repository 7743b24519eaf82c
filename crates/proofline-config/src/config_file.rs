//! Config file discovery
//!
//! `.proofline.toml` is looked up in the working directory, then in the
//! home directory. The first readable file wins.

use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".proofline.toml";

/// A config file that was found and read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub content: String,
}

/// Find and read the config file, if any
pub fn find_config_file() -> Option<ConfigFile> {
    read_first(&search_paths(dirs::home_dir().as_deref()))
}

/// Candidate locations in lookup order
fn search_paths(home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    paths.extend(home.map(|home| home.join(CONFIG_FILE_NAME)));
    paths
}

fn read_first(paths: &[PathBuf]) -> Option<ConfigFile> {
    paths.iter().find_map(|path| match std::fs::read_to_string(path) {
        Ok(content) => Some(ConfigFile {
            path: path.clone(),
            content,
        }),
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_working_directory_comes_first() {
        assert_eq!(
            search_paths(Some(Path::new("/home/ferris"))),
            vec![
                PathBuf::from(".proofline.toml"),
                PathBuf::from("/home/ferris/.proofline.toml"),
            ]
        );
        assert_eq!(search_paths(None), vec![PathBuf::from(".proofline.toml")]);
    }

    #[test]
    fn test_first_readable_file_wins() {
        let dir = std::env::temp_dir().join(format!("proofline-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let missing = dir.join("missing.toml");
        let present = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&present, "debounce_ms = 250").unwrap();

        let found = read_first(&[missing.clone(), present.clone()]);
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(
            found,
            Some(ConfigFile {
                path: present,
                content: "debounce_ms = 250".to_string(),
            })
        );
        assert_eq!(read_first(&[missing]), None);
    }
}
