//! Session guard: a shared text file holding zero or one session tokens,
//! checked optimistically at startup to decide edit-mode vs view-only-mode.
//! Last writer wins; there is no locking or atomicity. Concurrent writers can
//! race — a known, accepted weakness of this scheme, not something this
//! module tries to fix.

use anyhow::Context;
use rand::Rng;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// `<hostname> <8 random digits>` — unique enough to tell sessions apart in
/// the warning dialog, and human-readable so users know who holds the lock.
pub fn new_session_token() -> String {
    let host = gethostname::gethostname().to_string_lossy().into_owned();
    let mut rng = rand::thread_rng();
    let digits: String = (0..8)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    format!("{host} {digits}")
}

#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The token currently holding the edit session, if any. A missing file
    /// is a startup failure (the data directory is expected to exist).
    pub fn active_owner(&self) -> anyhow::Result<Option<String>> {
        let text =
            fs::read_to_string(&self.path).with_context(|| format!("reading {:?}", self.path))?;
        Ok(text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string))
    }

    pub fn claim(&self, token: &str) -> anyhow::Result<()> {
        fs::write(&self.path, token).with_context(|| format!("writing {:?}", self.path))
    }

    /// Idempotent: clears the file only if it still holds `token`. Another
    /// session's token is left alone.
    pub fn release(&self, token: &str) -> anyhow::Result<()> {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return Ok(());
        };
        if text.lines().any(|line| line.trim() == token) {
            self.clear()?;
        }
        Ok(())
    }

    /// Unconditional reset, used by the startup dialog's "clear session
    /// data" path.
    pub fn clear(&self) -> anyhow::Result<()> {
        fs::write(&self.path, "").with_context(|| format!("truncating {:?}", self.path))
    }
}

/// Holds a claimed token and releases it when dropped, so a normal exit (or
/// unwind) never leaves the session file pointing at a dead process.
#[derive(Debug)]
pub struct SessionGuard {
    file: SessionFile,
    token: String,
}

impl SessionGuard {
    pub fn claim(file: SessionFile, token: String) -> anyhow::Result<Self> {
        file.claim(&token)?;
        Ok(Self { file, token })
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if let Err(e) = self.file.release(&self.token) {
            log::warn!("failed to release session file: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionFile, SessionGuard, new_session_token};

    fn session_in_tempdir() -> (tempfile::TempDir, SessionFile) {
        let dir = tempfile::tempdir().unwrap();
        let file = SessionFile::new(dir.path().join("active_session.txt"));
        std::fs::write(file.path(), "").unwrap();
        (dir, file)
    }

    #[test]
    fn token_has_hostname_and_eight_digits() {
        let token = new_session_token();
        let digits = token.rsplit(' ').next().unwrap();
        assert_eq!(digits.len(), 8);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn claim_then_release_clears_the_file() {
        let (_dir, file) = session_in_tempdir();
        assert_eq!(file.active_owner().unwrap(), None);

        file.claim("host 12345678").unwrap();
        assert_eq!(
            file.active_owner().unwrap().as_deref(),
            Some("host 12345678")
        );

        file.release("host 12345678").unwrap();
        assert_eq!(file.active_owner().unwrap(), None);
    }

    #[test]
    fn release_leaves_a_foreign_token_alone() {
        let (_dir, file) = session_in_tempdir();
        file.claim("other 00000000").unwrap();
        file.release("mine 11111111").unwrap();
        assert_eq!(
            file.active_owner().unwrap().as_deref(),
            Some("other 00000000")
        );
        // Releasing twice with the right token stays fine.
        file.release("other 00000000").unwrap();
        file.release("other 00000000").unwrap();
        assert_eq!(file.active_owner().unwrap(), None);
    }

    #[test]
    fn guard_releases_on_drop() {
        let (_dir, file) = session_in_tempdir();
        {
            let _guard = SessionGuard::claim(file.clone(), "host 99999999".to_string()).unwrap();
            assert_eq!(
                file.active_owner().unwrap().as_deref(),
                Some("host 99999999")
            );
        }
        assert_eq!(file.active_owner().unwrap(), None);
    }
}
