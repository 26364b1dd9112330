//! File reading utilities

use crate::error::{Result, WinfetchError};
use std::fs;
use std::path::Path;

/// Read a file to string, replacing invalid UTF-8 instead of failing
pub fn read_lossy<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read first line of a file, trimmed
/// Optimized for single-line files like /proc/sys/kernel/hostname
#[cfg(unix)]
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_cstr = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| WinfetchError::Parse("Invalid path".to_string()))?;

    let mut buffer = [0u8; 256];
    // SAFETY: path_cstr is NUL-terminated and buffer outlives the read call.
    let bytes_read = unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY);
        if fd < 0 {
            return Err(WinfetchError::from(std::io::Error::last_os_error()));
        }
        let n = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        libc::close(fd);
        n
    };

    if bytes_read < 0 {
        return Err(WinfetchError::from(std::io::Error::last_os_error()));
    }

    let content = std::str::from_utf8(&buffer[..bytes_read as usize])
        .map_err(|_| WinfetchError::Parse("Invalid UTF-8".to_string()))?;
    Ok(content.lines().next().unwrap_or("").trim().to_string())
}

#[cfg(not(unix))]
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().next().unwrap_or("").trim().to_string())
}

/// Check if a file exists safely
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn first_line_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hostname");
        fs::write(&path, "  box-01 \nsecond line\n").unwrap();
        assert_eq!(read_first_line(&path).unwrap(), "box-01");
    }

    #[test]
    fn first_line_of_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_first_line(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, WinfetchError::Io(_)));
    }

    #[test]
    fn lossy_read_keeps_valid_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("art.txt");
        fs::write(&path, b"ok\xffline\n").unwrap();
        let text = read_lossy(&path).unwrap();
        assert!(text.starts_with("ok"));
        assert!(text.ends_with("line\n"));
    }
}
