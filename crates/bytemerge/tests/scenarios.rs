#![allow(missing_docs)]

use core::ops::ControlFlow;

use bytemerge::{
    BytemergeError,
    ChunkerConfig,
    RegexBpeTokenizer,
    TokenType,
    TrainingState,
    regex::GPT2_SPLIT_PATTERN,
    word_tokenizer::{WordTokenizer, WordTokenizerError, build_word_vocab},
};

const CORPUS: &str = "I HAD always thought Jack Gisburn rather a cheap genius--though a good \
fellow enough--so it was no great surprise to me to hear that, in the height of his glory, \
he had dropped his painting, married a rich widow, and established himself in a villa on the \
Riviera. (Though I rather thought it would have been Rome or Florence.) \"The height of his \
glory\"--that was what the women called it. I can hear Mrs. Gideon Thwing--his last Chicago \
sitter--deploring his unaccountable abdication. \"Of course it's going to send the value of my \
picture 'way up; but I don't think of that, Mr. Rickham--the loss to Arrollo is all I think of.\"";

const SAMPLES: &[&str] = &[
    "hello world",
    "The quick brown fox jumps over the lazy dog.",
    "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
    "Don't forget: the temperature is 72 degrees!",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "123 + 456 = 789",
    "caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}",
    "$$$!!!...---",
    " ",
    "a",
    "\t\ttabs\tand\tspaces ",
    "emoji: \u{1f600}\u{1f680}\u{1f4a1}",
    "mixed: hello\u{00a0}world\u{2003}wide",
];

fn init_logging() {
    // A second init in the same process fails; that's fine.
    let _ = stderrlog::new()
        .verbosity(stderrlog::LogLevelNum::Info)
        .init();
}

fn gpt4<T: TokenType>() -> RegexBpeTokenizer<T> {
    RegexBpeTokenizer::new(ChunkerConfig::default()).unwrap()
}

#[test]
fn empty_corpus_learns_nothing() {
    let mut tokenizer: RegexBpeTokenizer = gpt4();

    assert!(!tokenizer.train("", 256).unwrap());
    assert_eq!(tokenizer.merges().len(), 0);
    assert_eq!(tokenizer.vocab().len(), 256);
    assert_eq!(tokenizer.encode_ordinary("").unwrap(), Vec::<u32>::new());
    assert_eq!(tokenizer.decode(&[]).unwrap(), "");

    // A larger target on an empty corpus still learns nothing.
    assert!(!tokenizer.train("", 1000).unwrap());
    assert_eq!(tokenizer.vocab().len(), 256);
}

#[test]
fn single_pair_corpus() {
    let mut tokenizer: RegexBpeTokenizer = gpt4();
    tokenizer.train("aaaa", 257).unwrap();

    let records = tokenizer.merges().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].pair, (97, 97));
    assert_eq!(records[0].token, 256);

    assert_eq!(tokenizer.encode_ordinary("aaaa").unwrap(), vec![256, 256]);
    assert_eq!(tokenizer.decode(&[256, 256]).unwrap(), "aaaa");
}

#[test]
fn first_round_tie_goes_to_first_seen_pair() {
    let mut tokenizer: RegexBpeTokenizer = gpt4();

    // Chunks: "xy", " ab"; all three pairs occur once.
    assert!(tokenizer.train("xy ab", 257).unwrap());
    assert_eq!(tokenizer.state(), TrainingState::Trained { ambiguous: true });
    assert_eq!(tokenizer.merges().records()[0].pair, (b'x' as u32, b'y' as u32));
}

#[test]
fn undefined_token_is_an_error() {
    let tokenizer: RegexBpeTokenizer<u16> = gpt4();
    assert!(matches!(
        tokenizer.decode(&[72, 256]),
        Err(BytemergeError::UndefinedToken { token: 256 })
    ));
}

#[test]
fn vocab_size_below_bytes_is_rejected() {
    let mut tokenizer: RegexBpeTokenizer = gpt4();
    for size in [0, 1, 255] {
        assert!(matches!(
            tokenizer.train(CORPUS, size),
            Err(BytemergeError::VocabSizeTooSmall { .. })
        ));
    }
}

#[test]
fn training_is_deterministic() {
    init_logging();

    let mut a: RegexBpeTokenizer = gpt4();
    let mut b: RegexBpeTokenizer = gpt4();

    let amb_a = a.train(CORPUS, 350).unwrap();
    let amb_b = b.train(CORPUS, 350).unwrap();

    assert_eq!(amb_a, amb_b);
    assert_eq!(a.merges(), b.merges());
    assert_eq!(a.vocab(), b.vocab());
}

#[test]
fn vocab_size_bound_and_contiguous_ids() {
    let mut tokenizer: RegexBpeTokenizer = gpt4();
    tokenizer.train(CORPUS, 300).unwrap();

    let merges = tokenizer.merges();
    assert_eq!(tokenizer.vocab().len(), 300);
    assert_eq!(merges.len(), 44);

    for (i, record) in merges.iter().enumerate() {
        assert_eq!(record.token, 256 + i as u32);
        assert_eq!(merges.lookup_rank(&record.pair), Some(i));

        // Parents are always defined before the merge that uses them.
        assert!(record.pair.0 < record.token);
        assert!(record.pair.1 < record.token);

        let span = tokenizer.vocab().get_span(record.token).unwrap();
        let left = tokenizer.vocab().get_span(record.pair.0).unwrap();
        let right = tokenizer.vocab().get_span(record.pair.1).unwrap();
        assert_eq!(span, [left, right].concat());
    }
}

#[test]
fn round_trip_after_training() {
    fn check<T: TokenType>() {
        let mut tokenizer: RegexBpeTokenizer<T> = gpt4();
        tokenizer.train(CORPUS, 400).unwrap();

        for text in SAMPLES.iter().chain([&CORPUS]) {
            let tokens = tokenizer.encode_ordinary(text).unwrap();
            assert_eq!(
                &tokenizer.decode(&tokens).unwrap(),
                text,
                "round trip mismatch for {text:?}"
            );
        }

        // Training text compresses.
        assert!(tokenizer.encode_ordinary(CORPUS).unwrap().len() < CORPUS.len());
    }

    check::<u16>();
    check::<u32>();
    check::<u64>();
}

#[test]
fn gpt2_pattern_round_trip() {
    let mut tokenizer: RegexBpeTokenizer =
        RegexBpeTokenizer::new(ChunkerConfig::from_pattern(GPT2_SPLIT_PATTERN)).unwrap();
    tokenizer.train(CORPUS, 320).unwrap();

    for text in SAMPLES {
        let tokens = tokenizer.encode_ordinary(text).unwrap();
        assert_eq!(&tokenizer.decode(&tokens).unwrap(), text);
    }
}

#[test]
fn samples_train_independently() {
    let mut joined: RegexBpeTokenizer = gpt4();
    let mut split: RegexBpeTokenizer = gpt4();

    // (b, c) only occurs across the sample boundary.
    joined.train("abcd", 260).unwrap();
    split.train_samples(["ab", "cd"], 260).unwrap();

    assert_eq!(joined.merges().len(), 3);
    assert_eq!(split.merges().len(), 2);
    assert!(split.merges().lookup_rank(&(b'b' as u32, b'c' as u32)).is_none());
}

#[test]
fn observer_sees_every_round() {
    let mut tokenizer: RegexBpeTokenizer = gpt4();

    let mut seen = Vec::new();
    tokenizer
        .train_with_observer(CORPUS, 280, |round| {
            seen.push((round.index, round.token, round.count));
            ControlFlow::Continue(())
        })
        .unwrap();

    assert_eq!(seen.len(), 24);
    for (i, &(index, token, count)) in seen.iter().enumerate() {
        assert_eq!(index, i);
        assert_eq!(token, 256 + i as u32);
        assert!(count >= 1);
    }

    // Counts never increase: each round takes the current maximum.
    assert!(seen.windows(2).all(|w| w[0].2 >= w[1].2));
}

#[test]
fn word_tokenizer_keeps_its_own_ids() {
    let config = ChunkerConfig::from_pattern(r"\w+|[^\w\s]");
    let vocab = build_word_vocab(CORPUS, &config).unwrap();
    let tokenizer = WordTokenizer::new(vocab, &config).unwrap();

    let ids = tokenizer.encode("he had dropped his painting.").unwrap();
    assert!(ids.iter().all(|&id| id < tokenizer.len()));
    assert_eq!(
        tokenizer.decode(&ids).unwrap(),
        "he had dropped his painting."
    );

    assert!(matches!(
        tokenizer.decode(&[tokenizer.len()]),
        Err(WordTokenizerError::UndefinedWordId { .. })
    ));
}
