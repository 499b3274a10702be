use crate::areas::analyzer::Analyzer;
use crate::areas::graph_builder::GraphBuilder;
use crate::areas::graph_store::GraphStore;
use crate::artifacts::debug_log;
use crate::artifacts::graph::longest_path::{LongestPath, LongestPathFinder};
use crate::artifacts::record::input_source::InputSource;
use std::io::{BufRead, Write};

impl Analyzer {
    /// Print the longest path of the history read from `source`
    pub fn longest_path(&self, source: &InputSource) -> anyhow::Result<()> {
        let reader = source.open()?;
        self.longest_path_from(reader)
    }

    /// Print the longest path of the history read from `reader`, one
    /// `<commit> <timestamp>` line per commit, oldest first
    ///
    /// An empty history prints nothing.
    pub fn longest_path_from<R: BufRead>(&self, reader: R) -> anyhow::Result<()> {
        let mut builder = GraphBuilder::new();
        builder.read_from(reader)?;
        let mut graph = builder.finish();

        let Some(end) = graph.end_node() else {
            debug_log!("Empty history, nothing to display");
            return Ok(());
        };

        let path = LongestPathFinder::new(graph.store_mut()).longest_path(end)?;
        self.display_path(graph.store(), &path)?;
        self.writer().flush()?;

        Ok(())
    }

    fn display_path(&self, store: &GraphStore, path: &LongestPath) -> anyhow::Result<()> {
        let mut writer = self.writer();
        for node in path.entries(store) {
            writeln!(writer, "{}", node)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    /// Writer handing out clones that all append to the same buffer
    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).expect("Output should be UTF-8")
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn run(input: &str) -> anyhow::Result<String> {
        let output = SharedBuffer::default();
        let analyzer = Analyzer::new(Box::new(output.clone()));

        analyzer.longest_path_from(Cursor::new(input.to_string()))?;

        Ok(output.contents())
    }

    #[rstest]
    #[case::linear_chain("C3 300 C2\nC2 200 C1\nC1 100\n", "C1 100\nC2 200\nC3 300\n")]
    #[case::diamond("D 400 B C\nB 300 A\nC 200 A\nA 100\n", "A 100\nB 300\nD 400\n")]
    #[case::single_commit("X 50\n", "X 50\n")]
    #[case::parent_only_commit("Y 500 Z\n", "Z -1\nY 500\n")]
    #[case::back_filled_parent("Y 500 Z\nZ 400\n", "Z 400\nY 500\n")]
    #[case::no_trailing_newline("B 2 A\nA 1", "A 1\nB 2\n")]
    #[case::empty_history("", "")]
    #[case::blank_history("\n \n", "")]
    fn prints_longest_path_oldest_first(#[case] input: &str, #[case] expected: &str) {
        let output = run(input).expect("History should be valid");

        assert_eq!(output, expected);
    }

    #[test]
    fn cyclic_history_is_an_error() {
        let error = run("A 2 B\nB 1 A\n").expect_err("Cycle should be rejected");

        assert_eq!(error.to_string(), "cycle detected at commit A");
    }
}
