/*!
Arena-backed DOM trees for SVG icons, and the literal form they're embedded as.

Trees are parsed into an [`arena::Arena`], where every link between nodes is a
[`arena::NodeId`]. Once written out as [`literal`] data, a tree only keeps its forward links and
is relinked into an arena the first time it's used.

# Features

- `parse`: includes a fragment parser that uses html5ever
*/

pub mod arena;
pub mod literal;
pub mod name;
pub mod serialize;

#[cfg(feature = "parse")]
pub mod parse;

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}
