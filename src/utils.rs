//! Small string helpers.

/// Join path components with single slashes.
///
/// The first component keeps its leading slashes and loses trailing ones,
/// unless it consists only of slashes, in which case it is kept verbatim.
/// Later components lose slashes on both ends; components that end up empty
/// are skipped.
///
/// ```rust
/// # use element_graph::utils::join_path;
/// assert_eq!(join_path(["/usr/", "/lib//", "x.so"]), "/usr/lib/x.so");
/// assert_eq!(join_path(["/", "etc"]), "/etc");
/// ```
pub fn join_path<I, S>(pieces: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    let mut need_sep = false;
    for (i, piece) in pieces.into_iter().enumerate() {
        let raw = piece.as_ref();
        let trimmed = if i == 0 {
            let t = raw.trim_end_matches('/');
            if t.is_empty() { raw } else { t }
        } else {
            raw.trim_matches('/')
        };
        if trimmed.is_empty() {
            continue;
        }
        if need_sep {
            out.push('/');
        }
        out.push_str(trimmed);
        need_sep = !trimmed.ends_with('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_and_absolute() {
        assert_eq!(join_path(["a", "b", "c"]), "a/b/c");
        assert_eq!(join_path(["/a/", "/b/", "/c/"]), "/a/b/c");
    }

    #[test]
    fn all_slash_first_piece_is_kept() {
        assert_eq!(join_path(["/", "a"]), "/a");
        assert_eq!(join_path(["//", "a"]), "//a");
        assert_eq!(join_path(["/"]), "/");
    }

    #[test]
    fn empty_pieces_are_skipped() {
        assert_eq!(join_path(["a", "", "//", "b"]), "a/b");
        assert_eq!(join_path(["", "b"]), "b");
        assert_eq!(join_path(Vec::<String>::new()), "");
    }
}
