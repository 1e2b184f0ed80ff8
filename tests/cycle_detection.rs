use index_mapping::cycle::{detect, find_duplicate, try_find_duplicate};
use index_mapping::DomainError;
use rand::seq::SliceRandom;
use rand::Rng;

fn find_duplicate_brute(buf: &[i64]) -> Option<i64> {
    for i in 0..buf.len() {
        for j in i + 1..buf.len() {
            if buf[i] == buf[j] {
                return Some(buf[i]);
            }
        }
    }
    None
}

#[test]
fn finds_duplicate_in_short_cycle() {
    assert_eq!(find_duplicate(&[1, 3, 4, 2, 2]), 2);
}

#[test]
fn finds_triplicated_value() {
    assert_eq!(find_duplicate(&[2, 5, 9, 6, 9, 3, 8, 9, 7, 1]), 9);
}

#[test]
fn leaves_buffer_untouched() {
    let buf = vec![3, 1, 3, 4, 2];
    let before = buf.clone();
    assert_eq!(find_duplicate(&buf), 3);
    assert_eq!(buf, before);
}

#[test]
fn checked_entry_validates_range() {
    assert_eq!(try_find_duplicate(&[1, 3, 4, 2, 2]), Ok(2));
    assert_eq!(try_find_duplicate(&[]), Err(DomainError::LengthTooShort { len: 0, min: 2 }));
    assert_eq!(
        try_find_duplicate(&[1, 5, 2, 2]),
        Err(DomainError::OutOfDomain { value: 5, base: 1, len: 3 })
    );
}

#[test]
fn agrees_with_brute_force_on_random_buffers() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let n: i64 = rng.gen_range(1..60);
        let mut buf: Vec<i64> = (1..=n).collect();
        buf.push(rng.gen_range(1..=n));
        buf.shuffle(&mut rng);

        let detection = detect(&buf);
        assert_eq!(Some(detection.duplicate), find_duplicate_brute(&buf), "buffer {:?}", buf);
        assert!(detection.steps <= 2 * buf.len() + 1, "too many steps for {:?}", buf);
    }
}

#[test]
fn repeated_many_times_still_found() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let n: i64 = rng.gen_range(2..40);
        let dup = rng.gen_range(1..=n);
        let keep = rng.gen_range(1..n as usize);
        let mut buf: Vec<i64> = (1..=n).filter(|&v| v != dup).take(keep - 1).collect();
        buf.resize(n as usize + 1, dup);
        buf.shuffle(&mut rng);

        assert_eq!(find_duplicate(&buf), dup, "buffer {:?}", buf);
    }
}
