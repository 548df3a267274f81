use std::sync::Arc;
use std::thread;

use anyhow::Result;

use pcre_matcher::prelude::*;
use pcre_matcher::{Error, NotFound};

#[test]
fn test_match_groups() -> Result<()> {
    let _ = pretty_env_logger::try_init();

    let re = compile(r"^(\w+)\s+(?<second>\w+)?(!)?$", Flags::empty())?;
    let m = re.matcher("hello world", MatchFlags::empty())?;

    assert!(m.matches());
    assert_eq!(m.groups(), 3);
    assert_eq!(m.group_str(1)?, Some("hello"));
    assert_eq!(m.named_str("second")?, Some("world"));
    assert!(!m.present(3));
    assert_eq!(m.group(3), None);

    let m = re.matcher(&b"hello "[..], MatchFlags::empty())?;

    assert!(m.matches());
    assert_eq!(m.named("second")?, None);
    assert_eq!(m.group_bytes(1), Some(&b"hello"[..]));

    Ok(())
}

#[test]
fn test_unknown_name() -> Result<()> {
    let re = compile("(?<a>x)", Flags::empty())?;
    let m = re.matcher("x", MatchFlags::empty())?;

    assert_eq!(m.named("b"), Err(NotFound("b".to_owned())));

    match m.named_str("b") {
        Err(Error::NotFound(NotFound(name))) => assert_eq!(name, "b"),
        res => panic!("unexpected result: {:?}", res),
    }

    Ok(())
}

#[test]
fn test_compile_errors() {
    match compile("(", Flags::empty()) {
        Err(Error::Compile(err)) => {
            assert_eq!(err.pattern, "(");
            assert_eq!(err.offset, 1);
            assert!(!err.message.is_empty());
        }
        res => panic!("unexpected result: {:?}", res),
    }

    match compile("a\0b", Flags::empty()) {
        Err(Error::Compile(err)) => assert_eq!(err.offset, 1),
        res => panic!("unexpected result: {:?}", res),
    }
}

#[test]
fn test_rebind_matcher() -> Result<()> {
    let words = compile(r"(\w+) (\w+)", Flags::empty())?;
    let digits = compile(r"(\d+)", Flags::empty())?;
    let mut m = Matcher::new(&words)?;

    assert_eq!(m.outcome(), Outcome::NoAttempt);

    assert!(m.exec("one two", MatchFlags::empty())?);
    assert_eq!(m.group_str(2)?, Some("two"));

    assert!(m.reset(&digits, "abc 123", MatchFlags::empty())?);
    assert_eq!(m.groups(), 1);
    assert_eq!(m.group_str(1)?, Some("123"));
    assert!(!m.present(2));

    assert!(!m.reset(&words, "one", MatchFlags::empty())?);
    assert_eq!(m.outcome(), Outcome::NotMatched);

    Ok(())
}

#[test]
fn test_partial_match() -> Result<()> {
    let re = compile(r"^\d{4}-\d{2}", Flags::empty())?;
    let mut m = Matcher::new(&re)?;

    assert!(m.exec("2024-", MatchFlags::PARTIAL_HARD)?);
    assert!(m.is_partial());
    assert_eq!(m.group_str(0)?, Some("2024-"));

    assert!(!m.exec("20x4-", MatchFlags::PARTIAL_HARD)?);
    assert_eq!(m.outcome(), Outcome::NotMatched);

    Ok(())
}

#[test]
fn test_find_and_replace() -> Result<()> {
    let re = compile("foo", Flags::empty())?;

    assert!(re.is_match("a food", MatchFlags::empty())?);
    assert!(!re.is_match("a fod", MatchFlags::empty())?);
    assert_eq!(re.find_index("a food", MatchFlags::empty())?, Some(2..5));
    assert_eq!(re.replace_all("food fight fools foo", "car", MatchFlags::empty())?, "card fight carls car");
    assert_eq!(
        re.replace_all_bytes(b"\xfffoo\xff", b"bar", MatchFlags::empty())?,
        b"\xffbar\xff".to_vec()
    );
    assert_eq!(re.find_iter("foofoo foo", MatchFlags::empty())?, vec![0..3, 3..6, 7..10]);

    Ok(())
}

#[test]
fn test_parsed_pattern() -> Result<()> {
    let re = "/hello (?<who>\\w+)/i".parse::<Pattern>()?.build()?;

    assert_eq!(re.as_str(), "hello (?<who>\\w+)");
    assert_eq!(re.names().get("who"), Some(1));
    assert_eq!(
        re.matcher("HELLO World", MatchFlags::empty())?.named_str("who")?,
        Some("World")
    );

    Ok(())
}

#[test]
fn test_one_pattern_many_threads() -> Result<()> {
    let re = Arc::new(compile(r"(?<key>\w+)=(?<value>\d+)", Flags::empty())?);

    let handles = (0..8)
        .map(|i| {
            let re = Arc::clone(&re);

            thread::spawn(move || -> pcre_matcher::Result<usize> {
                let lines = (0..100).map(|n| format!("k{}={}", i, n)).collect::<Vec<_>>();
                let mut m = Matcher::new(&re)?;
                let mut total = 0;

                for line in &lines {
                    if m.exec(line, MatchFlags::empty())? {
                        total += m.named_str("value")?.map_or(0, |v| v.parse().unwrap_or(0));
                    }
                }

                Ok(total)
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked")?, (0..100).sum::<usize>());
    }

    Ok(())
}
