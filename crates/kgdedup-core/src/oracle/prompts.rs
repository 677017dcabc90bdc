//! Instructions sent to the LLM for each oracle query.

const SAME_MEANING: &str = "A cluster should contain items that are the same in meaning, \
with different tenses, plural forms, stem forms, or cases.\n\
Return populated list only if you find items that clearly belong together, else return empty list.";

/// Find one cluster of related items.
pub fn propose_cluster() -> String {
    format!("Find one cluster of related items from the list.\n{}", SAME_MEANING)
}

/// Validate a candidate cluster.
pub fn validate_cluster() -> String {
    format!("Validate if these items belong in the same cluster.\n{}", SAME_MEANING)
}

/// Pick a representative name.
pub const CHOOSE_REPRESENTATIVE: &str = "Select the best item name to represent the cluster, \
ideally from the cluster.\nPrefer shorter names and generalizability across the cluster.";

/// Assign leftover items to existing clusters.
pub const BATCH_ASSIGN: &str = "Determine if the given items can be added to any of the \
existing clusters.\nReturn representative of matching cluster for each item, or None if there is no match.";

/// Output keys, one per query.
pub mod keys {
    pub const CLUSTER: &str = "cluster";
    pub const VALIDATED_ITEMS: &str = "validated_items";
    pub const REPRESENTATIVE: &str = "representative";
    pub const ASSIGNMENTS: &str = "cluster_reps_that_items_belong_to";
}

/// Append the output-key directive to an instruction.
pub fn with_output_key(instruction: &str, key: &str) -> String {
    format!("{}\nReturn a JSON object with key '{}'.", instruction, key)
}
