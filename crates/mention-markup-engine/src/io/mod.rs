use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid posts file: {0}")]
    InvalidPostsFile(String),
}

/// One post from a posts file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// 1-based position in the file.
    pub number: usize,
    /// 1-based line the post starts on.
    pub line: usize,
    pub body: String,
}

/// Splits file content into posts. Posts are separated by one or more
/// blank (or whitespace-only) lines; lines inside a post keep their text.
pub fn split_posts(content: &str) -> Vec<Post> {
    let mut posts = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut start_line = 0;

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            push_post(&mut posts, &mut current, start_line);
            continue;
        }
        if current.is_empty() {
            start_line = i + 1;
        }
        current.push(line);
    }
    push_post(&mut posts, &mut current, start_line);

    posts
}

fn push_post(posts: &mut Vec<Post>, current: &mut Vec<&str>, line: usize) {
    if current.is_empty() {
        return;
    }
    posts.push(Post {
        number: posts.len() + 1,
        line,
        body: current.join("\n"),
    });
    current.clear();
}

/// Read a posts file and split it into posts
pub fn read_posts(path: &Path) -> Result<Vec<Post>, IoError> {
    validate_posts_file(path)?;
    let content = fs::read_to_string(path)?;
    let posts = split_posts(&content);
    log::info!("Loaded {} posts from {}", posts.len(), path.display());
    Ok(posts)
}

/// Validate that the path points at a readable posts file
pub fn validate_posts_file(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(IoError::InvalidPostsFile(format!(
            "{} is not a regular file",
            path.display()
        )));
    }
    Ok(())
}
