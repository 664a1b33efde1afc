//! Utility functions for GitHub operations

/// Detect the `owner/name` repository path in a URL
///
/// Used on the `Location` header of a github.com redirect. Supports:
/// - HTTPS: `https://github.com/owner/repo` (any host, as for GitHub Enterprise)
/// - SSH: `git@github.com:owner/repo.git`
/// - Legacy: `github.com/owner/repo`
///
/// A trailing `.git`, deeper path segments (`/tree/main`), query strings and
/// fragments are ignored. Returns `None` when no owner and name can be found.
pub fn detect_repo_name(url: &str) -> Option<String> {
    let url = url.trim();
    let url = url.split(['#', '?']).next().unwrap_or(url);

    let path = if let Some(after_user) = url.strip_prefix("git@") {
        after_user.split_once(':')?.1
    } else if let Some(without_protocol) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        without_protocol.split_once('/')?.1
    } else if let Some(pos) = url.find("github.com") {
        url[pos + "github.com".len()..].trim_start_matches([':', '/'])
    } else {
        return None;
    };

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let name = segments.next()?.trim_end_matches(".git");
    if name.is_empty() {
        return None;
    }

    Some(format!("{}/{}", owner, name))
}

/// Split a repository path into owner and name
///
/// Missing parts come back empty, and anything after the name is dropped.
pub(crate) fn split_path(path: &str) -> (&str, &str) {
    let mut parts = path.split('/');
    let owner = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();
    (owner, name)
}
