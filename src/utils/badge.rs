/// Vrací CSS třídu badge podle stavu indexu
pub fn status_badge_class(status: &str) -> &'static str {
    match status.to_ascii_uppercase().as_str() {
        "READY" => "bg-green-lt",
        "BUILDING" | "INDEXING" | "CREATING" => "bg-yellow-lt",
        "ERROR" | "FAILED" => "bg-red-lt",
        _ => "bg-secondary-lt", // neznámé stavy
    }
}

/// Role "admin" je zvýrazněná, ostatní jen obrysem
pub fn role_badge_class(role: &str) -> &'static str {
    if role.eq_ignore_ascii_case("admin") {
        "bg-primary text-white"
    } else {
        "badge-outline text-secondary"
    }
}

pub fn connection_badge_class(connected: bool) -> &'static str {
    if connected {
        "bg-green-lt"
    } else {
        "bg-red-lt"
    }
}
