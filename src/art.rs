//! ASCII art catalog: builtin `*.txt` files plus arbitrary user paths

use crate::error::{Result, WinfetchError};
use crate::utils::file::read_lossy;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builtin used when no art is requested
pub const DEFAULT_ART: &str = "windows";

/// Overrides the builtin art directory
pub const ART_DIR_ENV: &str = "WINFETCH_ART_DIR";

/// Arts compiled into the binary, used when no art directory exists
const EMBEDDED_ARTS: [(&str, &str); 4] = [
    ("windows", include_str!("../ascii_art/windows.txt")),
    ("retro", include_str!("../ascii_art/retro.txt")),
    ("linux", include_str!("../ascii_art/linux.txt")),
    ("minimal", include_str!("../ascii_art/minimal.txt")),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Dir(PathBuf),
    Embedded,
}

pub struct ArtCatalog {
    source: Source,
}

impl ArtCatalog {
    /// Catalog of the `*.txt` files in `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Dir(dir.into()),
        }
    }

    /// Catalog of the arts shipped inside the binary
    pub fn embedded() -> Self {
        Self {
            source: Source::Embedded,
        }
    }

    /// Catalog rooted at the first existing candidate directory, or the
    /// embedded arts when there is none
    pub fn locate() -> Self {
        match candidate_dirs().into_iter().find(|dir| dir.is_dir()) {
            Some(dir) => {
                debug!(dir = %dir.display(), "builtin art directory");
                Self::new(dir)
            }
            None => {
                debug!("no art directory, using embedded arts");
                Self::embedded()
            }
        }
    }

    /// Names of the builtin arts, in directory order
    pub fn list_builtins(&self) -> Vec<String> {
        let dir = match &self.source {
            Source::Dir(dir) => dir,
            Source::Embedded => {
                return EMBEDDED_ARTS
                    .iter()
                    .map(|(name, _)| name.to_string())
                    .collect()
            }
        };

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("cannot read art directory {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().map_or(false, |ext| ext == "txt"))
            .filter_map(|path| path.file_stem()?.to_str().map(String::from))
            .collect()
    }

    /// Art text for a builtin name or a file path. Empty or missing input
    /// means [`DEFAULT_ART`]; an existing path wins over a builtin of the same name.
    pub fn load(&self, name_or_path: Option<&str>) -> Result<String> {
        let name = name_or_path
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_ART);

        let expanded = shellexpand::tilde(name);
        let path = Path::new(expanded.as_ref());
        if path.is_file() {
            debug!(path = %path.display(), "loading art from file");
            return read_lossy(path);
        }

        match &self.source {
            Source::Dir(dir) => {
                let builtin = dir.join(format!("{}.txt", name));
                if builtin.is_file() {
                    debug!(name, "loading builtin art");
                    return read_lossy(&builtin);
                }
            }
            Source::Embedded => {
                if let Some((_, art)) = EMBEDDED_ARTS.iter().find(|(builtin, _)| *builtin == name) {
                    debug!(name, "loading embedded art");
                    return Ok(art.to_string());
                }
            }
        }

        Err(WinfetchError::ArtNotFound(name.to_string()))
    }
}

fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(dir) = env::var_os(ART_DIR_ENV).filter(|dir| !dir.is_empty()) {
        dirs.push(PathBuf::from(dir));
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir.join("ascii_art"));
    }
    #[cfg(unix)]
    dirs.push(PathBuf::from("/usr/share/winfetch/ascii_art"));
    dirs.push(PathBuf::from("ascii_art"));

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalog_with(files: &[(&str, &str)]) -> (TempDir, ArtCatalog) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let catalog = ArtCatalog::new(dir.path());
        (dir, catalog)
    }

    #[test]
    fn lists_only_txt_files() {
        let (_dir, catalog) = catalog_with(&[
            ("windows.txt", "W"),
            ("retro.txt", "R"),
            ("notes.md", "not art"),
        ]);
        let mut names = catalog.list_builtins();
        names.sort();
        assert_eq!(names, vec!["retro", "windows"]);
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let catalog = ArtCatalog::new("/nonexistent/winfetch/ascii_art");
        assert!(catalog.list_builtins().is_empty());
    }

    #[test]
    fn empty_name_loads_default() {
        let (_dir, catalog) = catalog_with(&[("windows.txt", "default art\n")]);
        assert_eq!(catalog.load(None).unwrap(), "default art\n");
        assert_eq!(catalog.load(Some("")).unwrap(), "default art\n");
    }

    #[test]
    fn builtin_by_name() {
        let (_dir, catalog) = catalog_with(&[("retro.txt", "+--+\n|  |\n+--+\n")]);
        assert_eq!(catalog.load(Some("retro")).unwrap(), "+--+\n|  |\n+--+\n");
    }

    #[test]
    fn absolute_path_is_read_verbatim() {
        let (_dir, catalog) = catalog_with(&[("windows.txt", "builtin")]);
        let other = TempDir::new().unwrap();
        let path = other.path().join("windows.txt");
        fs::write(&path, "  custom\n\tart  \n").unwrap();

        let text = catalog.load(path.to_str()).unwrap();
        assert_eq!(text, "  custom\n\tart  \n");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let (_dir, catalog) = catalog_with(&[("windows.txt", "W")]);
        let err = catalog.load(Some("does-not-exist")).unwrap_err();
        assert!(matches!(err, WinfetchError::ArtNotFound(_)));
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("--list-arts"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let (dir, catalog) = catalog_with(&[]);
        fs::write(dir.path().join("bytes.txt"), b"ok\xff\n").unwrap();
        assert_eq!(catalog.load(Some("bytes")).unwrap(), "ok\u{FFFD}\n");
    }

    #[test]
    fn embedded_catalog_ships_every_art() {
        let catalog = ArtCatalog::embedded();
        assert_eq!(
            catalog.list_builtins(),
            vec!["windows", "retro", "linux", "minimal"]
        );
        assert_eq!(
            catalog.load(None).unwrap(),
            include_str!("../ascii_art/windows.txt")
        );
        assert!(catalog.load(Some("minimal")).unwrap().contains("|_____|"));
    }

    #[test]
    fn embedded_catalog_still_reads_paths_and_reports_missing() {
        let catalog = ArtCatalog::embedded();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mine.txt");
        fs::write(&path, "mine\n").unwrap();
        assert_eq!(catalog.load(path.to_str()).unwrap(), "mine\n");

        let err = catalog.load(Some("does-not-exist")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn art_directory_overrides_embedded_arts() {
        let (_dir, catalog) = catalog_with(&[("windows.txt", "from dir")]);
        assert_eq!(catalog.list_builtins(), vec!["windows"]);
        assert_eq!(catalog.load(None).unwrap(), "from dir");
    }
}
