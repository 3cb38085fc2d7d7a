use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Case-insensitive string comparison that orders embedded numbers by value,
/// so `item2` sorts before `item10`.
///
/// Digit runs are compared numerically regardless of length; leading zeros do
/// not break ties (`a007` and `a7` compare equal). Everything else compares
/// by lowercase-folded code point.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();
    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let ord = compare_digit_runs(&mut ca, &mut cb);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let fx = fold(x);
                    let fy = fold(y);
                    if fx != fy {
                        return fx.cmp(&fy);
                    }
                    ca.next();
                    cb.next();
                }
            }
        }
    }
}

/// Consume the digit runs at the front of both iterators and compare them
/// by numeric value.
fn compare_digit_runs(ca: &mut Peekable<Chars>, cb: &mut Peekable<Chars>) -> Ordering {
    let ra = take_digit_run(ca);
    let rb = take_digit_run(cb);
    // Strip leading zeros, then longer run = bigger number
    let sa = ra.trim_start_matches('0');
    let sb = rb.trim_start_matches('0');
    match sa.len().cmp(&sb.len()) {
        Ordering::Equal => sa.cmp(sb),
        ord => ord,
    }
}

fn take_digit_run(it: &mut Peekable<Chars>) -> String {
    let mut run = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        it.next();
    }
    run
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
