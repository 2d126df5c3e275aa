use rand::Rng;

/// Generates a call name of the form `_` + `len` random alphanumeric
/// characters, used when a dispatcher is built without an explicit name.
pub fn random_call_name(len: usize) -> String {
    let mut rng = rand::rng();
    let key: String = (0..len)
        .map(|_| rng.sample(rand::distr::Alphanumeric) as char)
        .collect();
    format!("_{}", key)
}
