//! Plain-text rendering of search results

use std::io::Write;

use twitter_client::Post;

/// Write one block per post: author and handle, body, then avatar URL when
/// present. Blocks are separated by a blank line.
pub fn render_posts<W: Write>(out: &mut W, posts: &[Post]) -> std::io::Result<()> {
    if posts.is_empty() {
        writeln!(out, "No posts found")?;
        return Ok(());
    }

    for (i, post) in posts.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} ({})", post.author, post.handle)?;
        writeln!(out, "{}", post.body)?;
        if !post.avatar_url.is_empty() {
            writeln!(out, "avatar: {}", post.avatar_url)?;
        }
    }
    Ok(())
}
