/// Formátuje číslo s oddělovači tisíců
/// Příklad: 1234567 -> "1 234 567"
pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let first_group = match digits.len() % 3 {
        0 => 3,
        n => n,
    };

    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    result.push_str(&digits[..first_group]);
    for chunk in digits.as_bytes()[first_group..].chunks(3) {
        result.push(' ');
        // Číslice jsou ASCII
        result.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }

    result
}

/// Parsuje velikost z backendu (např. "3.2 GB", "512 MB") na gigabajty.
/// Číslo bez jednotky se bere jako GB, neznámý formát jako 0.
pub fn parse_size_gb(size: &str) -> f64 {
    let size = size.trim().to_lowercase();

    let split = size
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(size.len());
    let (num_str, unit) = size.split_at(split);

    let num: f64 = match num_str.parse() {
        Ok(n) => n,
        Err(_) => return 0.0,
    };

    let factor = match unit.trim() {
        "" | "g" | "gb" | "gib" => 1.0,
        "t" | "tb" | "tib" => 1024.0,
        "m" | "mb" | "mib" => 1.0 / 1024.0,
        "k" | "kb" | "kib" => 1.0 / (1024.0 * 1024.0),
        "b" => 1.0 / (1024.0 * 1024.0 * 1024.0),
        _ => return 0.0,
    };

    num * factor
}

/// Formátuje součet velikostí v GB na dvě desetinná místa
pub fn format_gb(gb: f64) -> String {
    format!("{:.2} GB", gb)
}
