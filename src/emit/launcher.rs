use crate::{
    domain::song::SongRecord,
    emit::{EmitError, cmd_quote, shell_quote, single_line},
};

pub const DEFAULT_WINDOWS_VLC: &str = r"C:\Program Files\VideoLAN\VLC\vlc.exe";

/// Shell the launcher script is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Cmd,
}

impl Shell {
    pub fn native() -> Self {
        if cfg!(windows) { Shell::Cmd } else { Shell::Bash }
    }

    pub fn script_extension(self) -> &'static str {
        match self {
            Shell::Bash => "sh",
            Shell::Cmd => "bat",
        }
    }

    fn quote(self, arg: &str) -> Result<String, EmitError> {
        match self {
            Shell::Bash => shell_quote(arg),
            Shell::Cmd => Ok(cmd_quote(arg)),
        }
    }
}

/// One VLC invocation with every playback url as an argument.
/// Songs without a url are left out.
pub fn render(
    title: &str,
    records: &[&SongRecord],
    shell: Shell,
    vlc_windows_path: &str,
) -> Result<String, EmitError> {
    let title = single_line(title);
    let mut out = match shell {
        Shell::Bash => format!("#!/bin/bash\n# {title}\nvlc"),
        Shell::Cmd => format!(
            "@echo off\nREM {}\nstart \"\" {}",
            title.replace('%', "%%"),
            cmd_quote(vlc_windows_path)
        ),
    };

    for url in records.iter().filter_map(|r| r.playback_url()) {
        out.push(' ');
        out.push_str(&shell.quote(url)?);
    }

    out.push('\n');
    Ok(out)
}
