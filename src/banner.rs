use crate::error::InvalidBannerError;
use crate::scan::{is_trivia_only, unterminated_comment};

fn is_shebang(line: &str) -> bool {
    line.starts_with("#!")
}

/// Shebang lines may only form the leading run of a banner. When the entry
/// module has its own hashbang that line is written first and the banner's
/// shebangs follow it; only the first line is read by the loader.
pub fn validate_banner(banner: &str) -> Result<(), InvalidBannerError> {
    if let Some(at) = unterminated_comment(banner) {
        let line = banner[..at].matches('\n').count() + 1;
        return Err(InvalidBannerError::UnterminatedComment { line });
    }

    let mut lines = banner.lines().enumerate();
    for (_, line) in lines.by_ref() {
        if !is_shebang(line) {
            break;
        }
    }
    for (i, line) in lines {
        if is_shebang(line) {
            return Err(InvalidBannerError::MisplacedShebang { line: i + 1 });
        }
    }
    Ok(())
}

pub fn validate_footer(footer: &str) -> Result<(), InvalidBannerError> {
    match footer.lines().position(is_shebang) {
        Some(i) => Err(InvalidBannerError::ShebangInFooter { line: i + 1 }),
        None => Ok(()),
    }
}

/// A banner written ahead of a top-level `"use strict"` must not contain
/// statements, otherwise the directive stops being part of the prologue.
pub fn validate_banner_before_directive(banner: &str) -> Result<(), InvalidBannerError> {
    let body: String = banner
        .lines()
        .skip_while(|l| is_shebang(l))
        .collect::<Vec<_>>()
        .join("\n");
    if is_trivia_only(&body) {
        Ok(())
    } else {
        Err(InvalidBannerError::StatementsBeforeDirective)
    }
}
