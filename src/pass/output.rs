//! Batch output: terminal, file, or an in-memory buffer for the clipboard.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use zeroize::Zeroize;

use super::SecureBufWriter;
use crate::entropy::{self, SecureRng};
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Generate `count` passwords and route them by `settings`.
///
/// Returns the joined passwords when `settings.to_clipboard` is set, so the
/// caller can hand them to the clipboard and zeroize afterwards.
pub fn generate_batch(settings: &Settings, count: usize) -> Result<Option<String>> {
    let mut rng = entropy::os();

    if settings.to_clipboard {
        let mut bytes = Vec::new();
        write_batch(&mut bytes, &mut rng, settings, count).map_err(Error::Terminal)?;
        // Safety: every alphabet is ASCII
        return Ok(Some(unsafe { String::from_utf8_unchecked(bytes) }));
    }

    if !settings.output_file_path.is_empty() {
        let file = open_output(&settings.output_file_path)?;
        let mut out = SecureBufWriter::new(file);
        write_batch(&mut out, &mut rng, settings, count)
            .and_then(|_| out.flush())
            .map_err(|source| Error::Output {
                path: settings.output_file_path.clone(),
                source,
            })?;
        return Ok(None);
    }

    let stdout = std::io::stdout();
    let mut out = SecureBufWriter::new(stdout.lock());
    let res = write_batch(&mut out, &mut rng, settings, count).and_then(|_| out.flush());
    stdout_result(res)?;
    Ok(None)
}

/// A closed pipe (`pwforge -n 1000 | head -1`) ends output quietly.
fn stdout_result(res: std::io::Result<()>) -> Result<()> {
    match res {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            log::debug!("stdout closed early");
            Ok(())
        }
        other => other.map_err(Error::Terminal),
    }
}

/// One password per line. Writes nothing when no class is enabled.
pub fn write_batch<W: Write, R: SecureRng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    settings: &Settings,
    count: usize,
) -> std::io::Result<()> {
    if settings.classes.is_empty() {
        log::warn!("no character class enabled, nothing generated");
        return Ok(());
    }

    let request = settings.request();
    let mut buf = Vec::with_capacity(request.length + 1);
    for _ in 0..count {
        request.generate_into(rng, &mut buf);
        buf.push(b'\n');
        let res = out.write_all(&buf);
        buf.zeroize();
        res?;
    }
    log::debug!("generated {count} password(s) of length {}", request.length);
    Ok(())
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_output(path: &str) -> Result<File> {
    let output_err = |source| Error::Output {
        path: path.to_string(),
        source,
    };

    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(output_err)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(output_err)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::{CharClass, ClassSet};

    fn settings(length: usize, classes: ClassSet) -> Settings {
        Settings {
            pass_length: length,
            classes,
            ..Default::default()
        }
    }

    #[test]
    fn batch_writes_one_line_per_password() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut out = Vec::new();
        let s = settings(12, ClassSet::empty().with(CharClass::Upper));
        write_batch(&mut out, &mut rng, &s, 5).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            assert_eq!(line.len(), 12);
            assert!(line.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn batch_with_no_classes_writes_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut out = Vec::new();
        write_batch(&mut out, &mut rng, &settings(12, ClassSet::empty()), 3).unwrap();
        assert!(out.is_empty());
    }

    /// Accepts `limit` bytes, then fails like a pipe whose reader exited.
    struct ClosedAfter {
        limit: usize,
        seen: usize,
    }

    impl Write for ClosedAfter {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            if self.seen >= self.limit {
                return Err(std::io::Error::from(ErrorKind::BrokenPipe));
            }
            self.seen += data.len();
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_pipe_is_not_an_error() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut out = ClosedAfter { limit: 17, seen: 0 };
        let res = write_batch(&mut out, &mut rng, &settings(16, ClassSet::all()), 1_000);
        assert_eq!(res.as_ref().map_err(|e| e.kind()), Err(ErrorKind::BrokenPipe));
        assert!(stdout_result(res).is_ok());
    }

    #[test]
    fn other_stdout_errors_still_fail() {
        let res = Err(std::io::Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(stdout_result(res), Err(Error::Terminal(_))));
    }

    #[test]
    fn open_output_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("pwforge-out-{}", std::process::id()));
        let path = dir.join("nested").join("out.txt");
        let path_str = path.to_string_lossy().to_string();

        let mut file = open_output(&path_str).unwrap();
        file.write_all(b"x\n").unwrap();
        drop(file);
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
