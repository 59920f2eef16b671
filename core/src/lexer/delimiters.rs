use crate::errors::LexFault;

/// Stack of expected closing characters for the brackets opened so far.
#[derive(Debug, Default)]
pub struct DelimiterStack {
    closers: Vec<char>,
}

impl DelimiterStack {
    pub fn open(&mut self, opener: char) {
        if let Some(closer) = closer_for(opener) {
            self.closers.push(closer);
        }
    }

    /// Pop the innermost frame and check it against `closer`.
    ///
    /// A mismatch still consumes the frame.
    pub fn close(&mut self, closer: char) -> Result<(), LexFault> {
        match self.closers.pop() {
            Some(expected) if expected == closer => Ok(()),
            Some(expected) => Err(LexFault::MismatchedCloser {
                closer,
                opener: opener_for(expected).unwrap_or(expected),
                expected,
            }),
            None => Err(LexFault::UnmatchedCloser { closer }),
        }
    }

    pub fn depth(&self) -> usize {
        self.closers.len()
    }
}

fn closer_for(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_nesting() {
        let mut stack = DelimiterStack::default();
        stack.open('(');
        stack.open('[');
        stack.open('{');
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.close('}'), Ok(()));
        assert_eq!(stack.close(']'), Ok(()));
        assert_eq!(stack.close(')'), Ok(()));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn mismatch_pops_the_frame() {
        let mut stack = DelimiterStack::default();
        stack.open('(');
        assert_eq!(
            stack.close(']'),
            Err(LexFault::MismatchedCloser {
                closer: ']',
                opener: '(',
                expected: ')',
            })
        );
        assert_eq!(stack.depth(), 0);
        assert_eq!(
            stack.close(')'),
            Err(LexFault::UnmatchedCloser { closer: ')' })
        );
    }
}
