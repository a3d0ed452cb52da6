/// Common prime lens focal lengths in millimetres, ascending.
pub const STANDARD_FOCAL_LENGTHS: [f64; 9] = [18.0, 24.0, 35.0, 55.0, 85.0, 105.0, 135.0, 200.0, 300.0];

/// Round a focal length to the nearest entry of [`STANDARD_FOCAL_LENGTHS`].
///
/// Values below or above the table clamp to its ends. A value exactly halfway
/// between two primes goes to the shorter one.
pub fn nearest_standard(mm: f64) -> f64 {
    let table = &STANDARD_FOCAL_LENGTHS;
    let idx = table.partition_point(|&p| p < mm);

    if idx == 0 {
        return table[0];
    }
    if idx == table.len() {
        return table[table.len() - 1];
    }

    let (below, above) = (table[idx - 1], table[idx]);
    if above - mm < mm - below {
        above
    } else {
        below
    }
}
