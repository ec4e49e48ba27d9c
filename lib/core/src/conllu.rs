//! External parser seam
//!
//! Tokenization, tagging and dependency parsing are not done here: a
//! [`Parser`] produces a [`Doc`] from text, and [`ConlluParser`] adapts the
//! CoNLL-U output of any Universal Dependencies parser (spaCy, UDPipe,
//! Stanza, ...) so the rest of the pipeline never knows which one ran.

use crate::doc::Doc;
use crate::error::{Error, Result};
use crate::token::Token;

/// Turns text into a dependency-parsed document.
pub trait Parser {
    fn parse(&self, text: &str) -> Result<Doc>;
}

/// Reads pre-parsed CoNLL-U content.
///
/// Multi-sentence inputs are concatenated into one document with
/// document-level token indices; heads stay within their sentence. The `tag`
/// column prefers XPOS (fine-grained, PTB-style - the tags the feature walk
/// is written against) and falls back to UPOS when XPOS is `_`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConlluParser;

impl ConlluParser {
    pub fn new() -> Self {
        Self
    }
}

struct Row {
    id: usize,
    form: String,
    lemma: String,
    tag: String,
    head: usize,
    dep: String,
    line: usize,
}

impl Parser for ConlluParser {
    fn parse(&self, text: &str) -> Result<Doc> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut sentence: Vec<Row> = Vec::new();

        for (line_no, raw) in text.lines().enumerate() {
            let line_no = line_no + 1;
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                flush_sentence(&mut sentence, &mut tokens)?;
                continue;
            }
            if line.starts_with('#') {
                continue;
            }

            let cols: Vec<&str> = line.split('\t').collect();
            if cols.len() < 8 {
                return Err(Error::Conllu {
                    line: line_no,
                    reason: format!("expected at least 8 tab-separated columns, got {}", cols.len()),
                });
            }
            // Multiword ranges (1-2) and empty nodes (1.1) carry no tree edges.
            if cols[0].contains('-') || cols[0].contains('.') {
                continue;
            }

            let id: usize = cols[0].parse().map_err(|_| Error::Conllu {
                line: line_no,
                reason: format!("invalid token id `{}`", cols[0]),
            })?;
            let head: usize = cols[6].parse().map_err(|_| Error::Conllu {
                line: line_no,
                reason: format!("invalid head `{}`", cols[6]),
            })?;
            if id != sentence.len() + 1 {
                return Err(Error::Conllu {
                    line: line_no,
                    reason: format!("token id `{}` out of sequence", id),
                });
            }

            let tag = if cols[4] == "_" { cols[3] } else { cols[4] };
            sentence.push(Row {
                id,
                form: cols[1].to_string(),
                lemma: cols[2].to_string(),
                tag: tag.to_string(),
                head,
                dep: cols[7].to_string(),
                line: line_no,
            });
        }
        flush_sentence(&mut sentence, &mut tokens)?;

        Doc::from_tokens(tokens)
    }
}

fn flush_sentence(sentence: &mut Vec<Row>, tokens: &mut Vec<Token>) -> Result<()> {
    if sentence.is_empty() {
        return Ok(());
    }
    let offset = tokens.len();
    let len = sentence.len();
    for row in sentence.drain(..) {
        if row.head > len {
            return Err(Error::Conllu {
                line: row.line,
                reason: format!("head `{}` outside sentence of {} tokens", row.head, len),
            });
        }
        let i = offset + row.id - 1;
        // Head 0 marks the root; roots point at themselves.
        let head = if row.head == 0 { i } else { offset + row.head - 1 };
        tokens.push(Token::new(i, row.form, row.lemma, row.tag, row.dep, head));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_sentence() {
        let conllu = "\
# text = two bedroom apartment
1\ttwo\ttwo\tNUM\tCD\t_\t2\tnummod\t_\t_
2\tbedroom\tbedroom\tNOUN\tNN\t_\t3\tcompound\t_\t_
3\tapartment\tapartment\tNOUN\tNN\t_\t0\tROOT\t_\t_
";
        let doc = ConlluParser::new().parse(conllu).unwrap();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.token(0).tag, "CD");
        assert_eq!(doc.token(1).head, 2);
        assert!(doc.token(2).is_root());
        assert_eq!(doc.children(2), &[1]);
    }

    #[test]
    fn test_xpos_falls_back_to_upos() {
        let conllu = "1\tgarden\tgarden\tNOUN\t_\t_\t0\tROOT\t_\t_\n";
        let doc = ConlluParser::new().parse(conllu).unwrap();
        assert_eq!(doc.token(0).tag, "NOUN");
    }

    #[test]
    fn test_two_sentences_get_document_indices() {
        let conllu = "\
1\ta\ta\tDET\tDT\t_\t2\tdet\t_\t_
2\thouse\thouse\tNOUN\tNN\t_\t0\tROOT\t_\t_

1\tlovely\tlovely\tADJ\tJJ\t_\t2\tamod\t_\t_
2\tgarden\tgarden\tNOUN\tNN\t_\t0\tROOT\t_\t_
";
        let doc = ConlluParser::new().parse(conllu).unwrap();
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.token(2).text, "lovely");
        assert_eq!(doc.token(2).head, 3);
        assert!(doc.token(3).is_root());
        assert_eq!(doc.children(3), &[2]);
    }

    #[test]
    fn test_range_and_comment_lines_skipped() {
        let conllu = "\
# sent_id = 1
1-2\tdu\t_\t_\t_\t_\t_\t_\t_\t_
1\tde\tde\tADP\tIN\t_\t2\tcase\t_\t_
2\tjardin\tjardin\tNOUN\tNN\t_\t0\tROOT\t_\t_
";
        let doc = ConlluParser::new().parse(conllu).unwrap();
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_bad_head_reports_line() {
        let conllu = "1\tx\tx\tNOUN\tNN\t_\t9\tdep\t_\t_\n";
        let err = ConlluParser::new().parse(conllu).unwrap_err();
        assert!(matches!(err, Error::Conllu { line: 1, .. }));
    }

    #[test]
    fn test_out_of_sequence_id() {
        let conllu = "3\tx\tx\tNOUN\tNN\t_\t0\tROOT\t_\t_\n";
        assert!(ConlluParser::new().parse(conllu).is_err());
    }
}
