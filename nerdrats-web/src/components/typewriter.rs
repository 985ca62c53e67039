use yew::prelude::*;

use crate::dom;

/// One frame of the typewriter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub word: usize,
    /// Visible prefix length, in characters.
    pub len: usize,
    pub deleting: bool,
}

/// Advance the animation by one tick.
///
/// Typing grows the prefix to the full word, then deletion shrinks it back
/// and moves on to the next word, wrapping around at the end.
#[must_use]
pub fn advance(frame: Frame, word_len: usize, word_count: usize) -> Frame {
    if word_count == 0 {
        return Frame::default();
    }
    if frame.deleting {
        if frame.len <= 1 {
            Frame {
                word: (frame.word + 1) % word_count,
                len: 0,
                deleting: false,
            }
        } else {
            Frame {
                len: frame.len - 1,
                ..frame
            }
        }
    } else if frame.len >= word_len {
        Frame {
            deleting: true,
            ..frame
        }
    } else {
        Frame {
            len: frame.len + 1,
            ..frame
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub words: Vec<AttrValue>,
    /// Milliseconds between keystrokes.
    #[prop_or(80)]
    pub delay_ms: i32,
    /// Milliseconds a fully typed word stays on screen.
    #[prop_or(1500)]
    pub hold_ms: i32,
}

/// Animated tagline that types and deletes each word in turn.
#[function_component(TypeWriter)]
pub fn type_writer(props: &Props) -> Html {
    let frame = use_state(Frame::default);

    {
        let frame_handle = frame.clone();
        let words = props.words.clone();
        let delay_ms = props.delay_ms;
        let hold_ms = props.hold_ms;
        use_effect_with(*frame, move |current| {
            let current = *current;
            let word_len = words
                .get(current.word)
                .map_or(0, |word| word.chars().count());
            // Hold the completed word before starting to delete it.
            let pause = if !current.deleting && current.len >= word_len && word_len > 0 {
                hold_ms
            } else {
                delay_ms
            };
            wasm_bindgen_futures::spawn_local(async move {
                if dom::sleep_ms(pause).await.is_ok() {
                    frame_handle.set(advance(current, word_len, words.len()));
                }
            });
        });
    }

    let text: String = props
        .words
        .get(frame.word)
        .map(|word| word.chars().take(frame.len).collect())
        .unwrap_or_default();

    html! {
        <div class="typewriter">
            { text }
            <span class="typewriter__caret" aria-hidden="true">{ "|" }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_the_word_out_then_deletes_it() {
        let mut frame = Frame::default();
        for expected in 1..=3 {
            frame = advance(frame, 3, 2);
            assert_eq!(frame.len, expected);
            assert!(!frame.deleting);
        }
        frame = advance(frame, 3, 2);
        assert!(frame.deleting);
        assert_eq!(frame.len, 3);
    }

    #[test]
    fn finishing_deletion_wraps_to_the_next_word() {
        let frame = Frame {
            word: 1,
            len: 1,
            deleting: true,
        };
        let next = advance(frame, 5, 2);
        assert_eq!(next, Frame::default());
    }

    #[test]
    fn empty_word_list_stays_put() {
        let frame = advance(Frame::default(), 0, 0);
        assert_eq!(frame, Frame::default());
    }
}
