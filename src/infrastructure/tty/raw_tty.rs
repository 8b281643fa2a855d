use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::mem::MaybeUninit;
use std::os::fd::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

use crate::domain::primitive::{Key, decode_key};
use crate::shared::error::AppError;

/// Controlling terminal of the process, independent of stdin/stdout redirection.
pub const TTY_PATH: &str = "/dev/tty";

/// Arrow keys arrive as a 3-byte escape sequence.
const READ_LEN: usize = 3;

/// An open terminal device held in raw mode.
///
/// The saved attributes are restored by `restore`, or on drop if the
/// handle is abandoned early. Dropping also closes the device.
struct RawTty {
    file: File,
    saved: libc::termios,
    restored: bool,
}

impl RawTty {
    fn open(path: &Path) -> Result<Self, AppError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| AppError::TtyOpen {
                path: path.display().to_string(),
                source,
            })?;

        let fd = file.as_raw_fd();
        let saved = get_attrs(fd).map_err(AppError::RawMode)?;

        let mut raw = saved;
        // SAFETY: `raw` is a fully initialized termios copied from tcgetattr.
        unsafe { libc::cfmakeraw(&mut raw) };
        set_attrs(fd, &raw).map_err(AppError::RawMode)?;

        Ok(Self {
            file,
            saved,
            restored: false,
        })
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }

    fn restore(mut self) -> Result<(), AppError> {
        self.restored = true;
        set_attrs(self.file.as_raw_fd(), &self.saved).map_err(AppError::RawMode)
    }
}

impl Drop for RawTty {
    fn drop(&mut self) {
        if !self.restored {
            let _ = set_attrs(self.file.as_raw_fd(), &self.saved);
        }
    }
}

fn get_attrs(fd: RawFd) -> io::Result<libc::termios> {
    let mut attrs = MaybeUninit::<libc::termios>::uninit();
    // SAFETY: `fd` is an open descriptor and `attrs` points to writable
    // storage of the right size. tcgetattr fills it completely on success.
    unsafe {
        if libc::tcgetattr(fd, attrs.as_mut_ptr()) != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(attrs.assume_init())
    }
}

fn set_attrs(fd: RawFd, attrs: &libc::termios) -> io::Result<()> {
    // SAFETY: `fd` is an open descriptor and `attrs` is a valid termios.
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, attrs) };
    if result != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Reads one key per call from the controlling terminal.
///
/// Every call opens the device, switches it to raw mode, performs a single
/// blocking read of up to three bytes, then restores and closes it. Nothing
/// is held between calls, so keys typed before a read starts go through the
/// normal line discipline (Enter then arrives as `Char(10)`, not `Enter`).
pub struct TtyKeyReader {
    path: PathBuf,
}

impl TtyKeyReader {
    pub fn new() -> Self {
        Self::with_path(TTY_PATH)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_key(&self) -> Result<Key, AppError> {
        let mut tty = RawTty::open(&self.path)?;

        let mut buf = [0u8; READ_LEN];
        let read = tty.read(&mut buf);
        tty.restore()?;

        let len = read.map_err(AppError::TtyRead)?;
        Ok(decode_key(&buf[..len]))
    }
}

impl Default for TtyKeyReader {
    fn default() -> Self {
        Self::new()
    }
}
