// SPDX-License-Identifier: GPL-3.0-only

/// Operating system name and release, e.g. "Linux 6.1.0"
///
/// Reports only the OS family when `uname` is unavailable.
#[cfg(unix)]
pub fn platform_version() -> String {
    match nix::sys::utsname::uname() {
        Ok(info) => format!(
            "{} {}",
            info.sysname().to_string_lossy(),
            info.release().to_string_lossy()
        ),
        Err(e) => {
            tracing::debug!("uname failed, reporting OS family only: {e}");
            std::env::consts::OS.to_string()
        }
    }
}

#[cfg(not(unix))]
pub fn platform_version() -> String {
    std::env::consts::OS.to_string()
}
