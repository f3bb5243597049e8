use std::fmt::{Display, Formatter, Result};

use crate::node::Node;

/// Renders a tree in the Graphviz dot format, labelling each node with its key
/// and cached height.
#[derive(Debug)]
pub(crate) struct Dot<'a>(pub(crate) Option<&'a Node>);

impl Display for Dot<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "digraph {{")?;
        writeln!(
            f,
            r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
        )?;
        if let Some(n) = self.0 {
            recurse(n, f)?;
        }
        writeln!(f, "}}")
    }
}

fn recurse(n: &Node, f: &mut Formatter<'_>) -> Result {
    writeln!(
        f,
        r#""{}" [label="{} | h={}"];"#,
        n.key(),
        n.key(),
        n.height()
    )?;

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(f, "\"{}\" -> \"{}\" [color = \"orange1\";];", n.key(), v.key())?;
                recurse(v, f)?;
            }
            None => {
                writeln!(f, "\"null_{}\" [shape=point,style=invis];", n.key())?;
                writeln!(f, "\"{}\" -> \"null_{}\" [style=invis];", n.key(), n.key())?;
            }
        };
    }

    Ok(())
}
