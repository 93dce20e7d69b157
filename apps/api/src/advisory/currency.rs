//! Indian Rupee formatting: lakh/crore digit grouping, figures, and amounts in words.

const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Groups digits the Indian way: last three, then pairs. `1000000` → `10,00,000`.
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

/// `₹1,10,00,000.00`. Negative inputs are clamped to zero.
pub fn format_inr(amount: f64) -> String {
    let paise = to_paise(amount);
    format!("₹{}.{:02}", group_indian(paise / 100), paise % 100)
}

/// Reads the first figure out of a model-written amount such as `"₹1,10,00,000.00"`
/// or `"Rs. 5,00,000 (approx)"`. Grouping commas are ignored.
pub fn parse_inr(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let figure: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .filter(|c| *c != ',')
        .collect();
    figure.trim_end_matches('.').parse().ok()
}

/// `Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees and Eighty Nine Paise`.
pub fn amount_in_words(amount: f64) -> String {
    let paise = to_paise(amount);
    let rupees = paise / 100;
    let remainder = paise % 100;

    let mut words = format!("{} Rupees", number_in_words(rupees));
    if remainder > 0 {
        words.push_str(&format!(" and {} Paise", below_hundred(remainder)));
    }
    words
}

fn to_paise(amount: f64) -> u64 {
    (amount.max(0.0) * 100.0).round() as u64
}

fn number_in_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut parts = Vec::new();
    let crores = n / CRORE;
    let rest = n % CRORE;

    if crores > 0 {
        parts.push(format!("{} Crore", number_in_words(crores)));
    }
    let lakhs = rest / LAKH;
    if lakhs > 0 {
        parts.push(format!("{} Lakh", below_hundred(lakhs)));
    }
    let thousands = (rest % LAKH) / THOUSAND;
    if thousands > 0 {
        parts.push(format!("{} Thousand", below_hundred(thousands)));
    }
    let hundreds = (rest % THOUSAND) / 100;
    if hundreds > 0 {
        parts.push(format!("{} Hundred", ONES[hundreds as usize]));
    }
    let units = rest % 100;
    if units > 0 {
        parts.push(below_hundred(units));
    }

    parts.join(" ")
}

fn below_hundred(n: u64) -> String {
    match n {
        0..=19 => ONES[n as usize].to_string(),
        _ if n % 10 == 0 => TENS[(n / 10) as usize].to_string(),
        _ => format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize]),
    }
}
