//! Elevation queries.
//!
//! Mutating resolver configuration requires elevated privileges on every
//! supported platform. The check is advisory pre-flight only: the
//! presentation layer gates apply operations on it, while the core lets OS
//! calls fail naturally if privilege is revoked mid-operation.

/// Returns `true` when the process runs with the privileges needed to
/// mutate resolver configuration.
///
/// - POSIX: effective uid 0.
/// - Windows: the process token reports elevation.
/// - Unsupported platforms: always `false`.
#[must_use]
pub fn is_elevated() -> bool {
    imp::is_elevated()
}

#[cfg(unix)]
mod imp {
    pub fn is_elevated() -> bool {
        // SAFETY: geteuid has no preconditions and cannot fail.
        unsafe { libc::geteuid() == 0 }
    }
}

#[cfg(windows)]
mod imp {
    use windows::Win32::Foundation::{CloseHandle, HANDLE};
    use windows::Win32::Security::{
        GetTokenInformation, TOKEN_ELEVATION, TOKEN_QUERY, TokenElevation,
    };
    use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

    pub fn is_elevated() -> bool {
        let mut token = HANDLE::default();
        // SAFETY: the pseudo handle from GetCurrentProcess needs no
        // closing; token is closed below on every success path.
        if unsafe { OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &raw mut token) }.is_err()
        {
            return false;
        }

        let mut elevation = TOKEN_ELEVATION::default();
        #[allow(clippy::cast_possible_truncation)]
        let mut len = size_of::<TOKEN_ELEVATION>() as u32;
        // SAFETY: buffer and length describe a valid TOKEN_ELEVATION.
        let queried = unsafe {
            GetTokenInformation(
                token,
                TokenElevation,
                Some((&raw mut elevation).cast()),
                len,
                &raw mut len,
            )
        };
        // SAFETY: token came from a successful OpenProcessToken.
        unsafe {
            let _ = CloseHandle(token);
        }

        queried.is_ok() && elevation.TokenIsElevated != 0
    }
}

#[cfg(not(any(unix, windows)))]
mod imp {
    pub fn is_elevated() -> bool {
        false
    }
}
