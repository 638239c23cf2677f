/// Formats a non-negative rupee amount with Indian digit grouping.
///
/// The last three digits form one group, every group above that is two digits
/// wide: `12,34,56,789` (12 crore, 34 lakh, 56 thousand, 789). A crore prefix
/// longer than two digits is left ungrouped, matching the conventional
/// rendering of very large amounts.
pub fn format_inr(amount: u64) -> String {
    let s = amount.to_string();
    let l = s.len();
    if l > 7 {
        let (crores, rest) = s.split_at(l - 7);
        format!("{},{},{},{}", crores, &rest[..2], &rest[2..4], &rest[4..])
    } else if l > 5 {
        let (lakhs, rest) = s.split_at(l - 5);
        format!("{},{},{}", lakhs, &rest[..2], &rest[2..])
    } else if l > 3 {
        let (thousands, rest) = s.split_at(l - 3);
        format!("{},{}", thousands, rest)
    } else {
        s
    }
}
