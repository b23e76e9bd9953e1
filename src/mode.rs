//! Permission and file type formatting for raw `st_mode` bits

use serde::Serialize;

const TYPE_MASK: u32 = 0o170_000;
const PERMISSION_MASK: u32 = 0o7777;

const SET_UID: u32 = 0o4000;
const SET_GID: u32 = 0o2000;
const STICKY: u32 = 0o1000;

/// File type encoded in the high bits of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    File,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    Unknown,
}

impl FileKind {
    pub fn from_mode(mode: u32) -> Self {
        match mode & TYPE_MASK {
            0o100_000 => FileKind::File,
            0o040_000 => FileKind::Directory,
            0o120_000 => FileKind::Symlink,
            0o020_000 => FileKind::CharDevice,
            0o060_000 => FileKind::BlockDevice,
            0o010_000 => FileKind::Fifo,
            0o140_000 => FileKind::Socket,
            _ => FileKind::Unknown,
        }
    }

    /// Label shown in the type column.
    pub fn label(self) -> &'static str {
        match self {
            FileKind::File => "File",
            FileKind::Directory => "Directory",
            FileKind::Symlink => "Symbolic Link",
            FileKind::CharDevice => "Character Device",
            FileKind::BlockDevice => "Block Device",
            FileKind::Fifo => "FIFO",
            FileKind::Socket => "Socket",
            FileKind::Unknown => "Unknown",
        }
    }
}

/// Render the permission bits as `rwxr-xr-x`.
///
/// The execute slots carry setuid, setgid and sticky: lowercase `s`/`t` when
/// the execute bit is also set, uppercase `S`/`T` when it is not.
pub fn symbolic_mode(mode: u32) -> String {
    let triad = |shift: u32, special: u32, special_char: char| {
        let bits = (mode >> shift) & 0o7;
        let exec = bits & 0o1 != 0;
        [
            if bits & 0o4 != 0 { 'r' } else { '-' },
            if bits & 0o2 != 0 { 'w' } else { '-' },
            match (mode & special != 0, exec) {
                (true, true) => special_char,
                (true, false) => special_char.to_ascii_uppercase(),
                (false, true) => 'x',
                (false, false) => '-',
            },
        ]
    };

    triad(6, SET_UID, 's')
        .into_iter()
        .chain(triad(3, SET_GID, 's'))
        .chain(triad(0, STICKY, 't'))
        .collect()
}

/// Render the low twelve permission bits as four zero-padded octal digits.
pub fn octal_mode(mode: u32) -> String {
    format!("{:04o}", mode & PERMISSION_MASK)
}
