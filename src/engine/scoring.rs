use crate::models::job::Job;
use crate::models::selector::Selector;
use crate::models::worker::Worker;

// Threshold applied when the caller supplies no selectors: one point for a
// licensure overlap, one point from the jurisdiction check.
const BASE_SCORE_REQUIRED: i32 = 2;

/// Computes the binary qualification score for a worker against a job.
///
/// Returns 100 when the accumulated score reaches the required threshold,
/// otherwise 0; there is no partial credit. With selectors present, the
/// threshold is the sum of every selector's value (unrecognized keys
/// included) and each selector contributes according to its key and
/// operator. Without selectors, the threshold is fixed at 2.
///
/// Note the no-selector jurisdiction check is inverted: a job jurisdiction
/// NOT covered by the worker scores the point. This matches the upstream
/// behavior and is kept verbatim; see DESIGN.md.
pub fn worker_score(job: &Job, worker: &Worker, selectors: &[Selector]) -> i32 {
    let job_licensures = split_codes(&job.certification_id);
    let worker_licensures = split_codes(&worker.certification_ids);
    let worker_jurisdictions = split_codes(&worker.jurisdiction_ids);

    let mut score = 0;
    let score_required;

    if selectors.is_empty() {
        score_required = BASE_SCORE_REQUIRED;

        score += licensure_match_score(&job_licensures, &worker_licensures, 1);
        score += if worker_jurisdictions.contains(&job.jurisdiction_id.as_str()) {
            0
        } else {
            1
        };
    } else {
        score_required = selectors.iter().map(|selector| selector.value).sum();

        for selector in selectors {
            match selector.key.to_ascii_lowercase().as_str() {
                "licensure" => {
                    let licensure_score =
                        licensure_match_score(&job_licensures, &worker_licensures, selector.value);

                    match selector.operator.to_ascii_lowercase().as_str() {
                        "greaterthanequal" if licensure_score >= selector.value => {
                            score += licensure_score;
                        }
                        "equals" if licensure_score == selector.value => {
                            score += licensure_score;
                        }
                        _ => {}
                    }
                }
                "jurisdiction" => {
                    let has = worker_jurisdictions.contains(&job.jurisdiction_id.as_str());

                    score += match selector.operator.to_ascii_lowercase().as_str() {
                        "equals" if has => selector.value,
                        "notequals" if !has => selector.value,
                        _ => 0,
                    };
                }
                // Unrecognized keys contribute nothing, though their value
                // already raised the required threshold.
                _ => {}
            }
        }
    }

    if score >= score_required { 100 } else { 0 }
}

/// Splits a comma-separated code list, discarding empty segments. Codes
/// compare case-sensitively and are never trimmed.
fn split_codes(raw: &str) -> Vec<&str> {
    raw.split(',').filter(|segment| !segment.is_empty()).collect()
}

fn licensure_match_score(job_codes: &[&str], worker_codes: &[&str], value: i32) -> i32 {
    if job_codes.iter().any(|code| worker_codes.contains(code)) {
        value
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::worker_score;
    use crate::models::job::Job;
    use crate::models::selector::Selector;
    use crate::models::worker::Worker;

    fn job(certifications: &str, jurisdiction: &str) -> Job {
        Job {
            certification_id: certifications.to_string(),
            jurisdiction_id: jurisdiction.to_string(),
            high_priority: false,
        }
    }

    fn worker(certifications: &str, jurisdictions: &str) -> Worker {
        Worker {
            id: "worker-1".to_string(),
            certification_ids: certifications.to_string(),
            jurisdiction_ids: jurisdictions.to_string(),
            high_priority: false,
        }
    }

    fn selector(key: &str, operator: &str, value: i32) -> Selector {
        Selector {
            key: key.to_string(),
            operator: operator.to_string(),
            value,
            expires_after_seconds: None,
        }
    }

    #[test]
    fn no_selectors_full_match_scores_zero() {
        // Licensure overlap earns 1, covered jurisdiction earns 0; 1 < 2.
        let score = worker_score(&job("RN", "CA"), &worker("RN,LPN", "CA,NV"), &[]);
        assert_eq!(score, 0);
    }

    #[test]
    fn no_selectors_jurisdiction_mismatch_scores_hundred() {
        let score = worker_score(&job("RN", "CA"), &worker("RN,LPN", "NV"), &[]);
        assert_eq!(score, 100);
    }

    #[test]
    fn no_selectors_no_licensure_overlap_scores_zero() {
        let score = worker_score(&job("RN", "CA"), &worker("LPN", "NV"), &[]);
        assert_eq!(score, 0);
    }

    #[test]
    fn licensure_equals_exact_threshold() {
        let selectors = [selector("licensure", "equals", 5)];
        let score = worker_score(&job("RN", "CA"), &worker("RN", "CA"), &selectors);
        assert_eq!(score, 100);
    }

    #[test]
    fn licensure_equals_without_overlap_fails() {
        let selectors = [selector("licensure", "equals", 5)];
        let score = worker_score(&job("RN", "CA"), &worker("LPN", "CA"), &selectors);
        assert_eq!(score, 0);
    }

    #[test]
    fn licensure_greaterthanequal_contributes_on_overlap() {
        let selectors = [selector("licensure", "greaterthanequal", 4)];
        let score = worker_score(&job("RN,LPN", "CA"), &worker("LPN", "CA"), &selectors);
        assert_eq!(score, 100);
    }

    #[test]
    fn licensure_unknown_operator_contributes_nothing() {
        let selectors = [selector("licensure", "lessthan", 3)];
        let score = worker_score(&job("RN", "CA"), &worker("RN", "CA"), &selectors);
        assert_eq!(score, 0);
    }

    #[test]
    fn jurisdiction_equals_with_coverage() {
        let selectors = [selector("jurisdiction", "equals", 7)];
        let score = worker_score(&job("RN", "CA"), &worker("LPN", "CA,NV"), &selectors);
        assert_eq!(score, 100);
    }

    #[test]
    fn jurisdiction_notequals_without_coverage() {
        let selectors = [selector("jurisdiction", "notequals", 10)];
        let score = worker_score(&job("RN", "CA"), &worker("RN", "NV"), &selectors);
        assert_eq!(score, 100);
    }

    #[test]
    fn jurisdiction_unknown_operator_contributes_nothing() {
        let selectors = [selector("jurisdiction", "greaterthanequal", 2)];
        let score = worker_score(&job("RN", "CA"), &worker("RN", "CA"), &selectors);
        assert_eq!(score, 0);
    }

    #[test]
    fn zero_value_unknown_selector_trivially_passes() {
        // The threshold sums to 0, which any score satisfies.
        let selectors = [selector("unknown", "x", 0)];
        let score = worker_score(&job("RN", "CA"), &worker("", ""), &selectors);
        assert_eq!(score, 100);
    }

    #[test]
    fn unknown_selector_still_raises_threshold() {
        // licensure earns 5 but the unrecognized key pushed the threshold
        // to 8, so the worker falls short.
        let selectors = [
            selector("licensure", "equals", 5),
            selector("seniority", "equals", 3),
        ];
        let score = worker_score(&job("RN", "CA"), &worker("RN", "CA"), &selectors);
        assert_eq!(score, 0);
    }

    #[test]
    fn keys_and_operators_match_case_insensitively() {
        let selectors = [
            selector("LICENSURE", "Equals", 2),
            selector("Jurisdiction", "NotEquals", 3),
        ];
        let score = worker_score(&job("RN", "CA"), &worker("RN", "NV"), &selectors);
        assert_eq!(score, 100);
    }

    #[test]
    fn codes_compare_case_sensitively() {
        let selectors = [selector("licensure", "equals", 3)];
        let score = worker_score(&job("rn", "CA"), &worker("RN", "CA"), &selectors);
        assert_eq!(score, 0);
    }

    #[test]
    fn empty_code_strings_never_match() {
        // No licensure point; the empty job jurisdiction is not covered,
        // which still earns the inverted point. 1 < 2.
        let score = worker_score(&job("", ""), &worker("", ""), &[]);
        assert_eq!(score, 0);
    }

    #[test]
    fn dangling_commas_are_discarded() {
        let score = worker_score(&job("RN,", "CA"), &worker(",RN,,", "NV"), &[]);
        assert_eq!(score, 100);
    }

    #[test]
    fn returns_only_zero_or_hundred_and_is_deterministic() {
        let cases = [
            (job("RN", "CA"), worker("RN,LPN", "CA,NV"), vec![]),
            (job("RN", "CA"), worker("RN", "NV"), vec![]),
            (
                job("RN", "CA"),
                worker("RN", "CA"),
                vec![selector("licensure", "equals", 5)],
            ),
            (
                job("", ""),
                worker("", ""),
                vec![selector("unknown", "x", 0)],
            ),
        ];

        for (job, worker, selectors) in &cases {
            let first = worker_score(job, worker, selectors);
            let second = worker_score(job, worker, selectors);
            assert!(first == 0 || first == 100);
            assert_eq!(first, second);
        }
    }
}
