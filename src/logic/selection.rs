use std::collections::HashMap;

use crate::models::{Category, Impact, Priority, Recommendation};

/// Final list never exceeds this.
pub const MAX_RECOMMENDATIONS: usize = 4;

/// At most this many per category, until the relaxation pass.
pub const CATEGORY_CAP: usize = 2;

/// Sort by priority then impact, then greedily pick a diverse top four.
///
/// Pass 1 takes every high-priority, high-impact, personalised item (their
/// categories still count against the cap). Pass 2 adds remaining personalised
/// items under the per-category cap, pass 3 does the same for the rest, and
/// pass 4 relaxes the cap to fill up to four. This is a greedy heuristic, not
/// an optimal cover - in rare combinations it returns fewer than four even
/// when four qualify, and that behavior is deliberate.
pub fn select(mut recs: Vec<Recommendation>) -> Vec<Recommendation> {
    recs.sort_by_key(|r| (r.priority.rank(), r.impact_or_default().rank()));

    let mut taken = vec![false; recs.len()];
    let mut counts: HashMap<Category, usize> = HashMap::new();
    let mut selected: Vec<usize> = Vec::new();

    // Pass 1: must-have items
    for (i, rec) in recs.iter().enumerate() {
        if rec.priority == Priority::High
            && rec.impact_or_default() == Impact::High
            && rec.is_personalised
        {
            taken[i] = true;
            *counts.entry(rec.category).or_insert(0) += 1;
            selected.push(i);
        }
    }

    // Pass 2: remaining personalised, capped per category
    for (i, rec) in recs.iter().enumerate() {
        if taken[i] || !rec.is_personalised || selected.len() >= MAX_RECOMMENDATIONS {
            continue;
        }
        let count = counts.entry(rec.category).or_insert(0);
        if *count < CATEGORY_CAP {
            taken[i] = true;
            *count += 1;
            selected.push(i);
        }
    }

    // Pass 3: remaining non-personalised, capped per category
    for (i, rec) in recs.iter().enumerate() {
        if taken[i] || selected.len() >= MAX_RECOMMENDATIONS {
            continue;
        }
        let count = counts.entry(rec.category).or_insert(0);
        if *count < CATEGORY_CAP {
            taken[i] = true;
            *count += 1;
            selected.push(i);
        }
    }

    // Pass 4: under-filled, relax the cap
    for (i, _) in recs.iter().enumerate() {
        if selected.len() >= MAX_RECOMMENDATIONS {
            break;
        }
        if !taken[i] {
            taken[i] = true;
            selected.push(i);
        }
    }

    selected.sort_unstable();
    let mut out: Vec<Recommendation> = Vec::with_capacity(MAX_RECOMMENDATIONS);
    for i in selected {
        out.push(recs[i].clone());
    }
    out.truncate(MAX_RECOMMENDATIONS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(
        id: &str,
        category: Category,
        priority: Priority,
        impact: Option<Impact>,
        personalised: bool,
    ) -> Recommendation {
        let mut r = Recommendation::new(id, category, priority, id.to_string(), "d");
        r.impact = impact;
        r.is_personalised = personalised;
        r
    }

    #[test]
    fn output_is_priority_ordered() {
        let out = select(vec![
            rec("a", Category::Cooking, Priority::Low, None, false),
            rec("b", Category::Heating, Priority::High, None, true),
            rec("c", Category::Laundry, Priority::Medium, None, true),
        ]);
        for pair in out.windows(2) {
            assert!(pair[0].priority.rank() <= pair[1].priority.rank());
        }
        assert_eq!(out[0].id, "b");
    }

    #[test]
    fn impact_breaks_priority_ties() {
        let out = select(vec![
            rec("low-impact", Category::Heating, Priority::High, Some(Impact::Low), true),
            rec("high-impact", Category::Laundry, Priority::High, Some(Impact::High), true),
        ]);
        assert_eq!(out[0].id, "high-impact");
    }

    #[test]
    fn caps_output_at_four() {
        let recs: Vec<Recommendation> = (0..8)
            .map(|i| {
                rec(
                    &format!("r{}", i),
                    if i % 2 == 0 {
                        Category::Heating
                    } else {
                        Category::Laundry
                    },
                    Priority::Medium,
                    None,
                    true,
                )
            })
            .collect();
        assert_eq!(select(recs).len(), 4);
    }

    #[test]
    fn category_cap_enforced_when_enough_choice() {
        let out = select(vec![
            rec("h1", Category::Heating, Priority::High, None, true),
            rec("h2", Category::Heating, Priority::High, None, true),
            rec("h3", Category::Heating, Priority::Medium, None, true),
            rec("l1", Category::Laundry, Priority::Low, None, true),
            rec("c1", Category::Cooking, Priority::Low, None, false),
        ]);
        assert_eq!(out.len(), 4);
        let heating = out.iter().filter(|r| r.category == Category::Heating).count();
        assert_eq!(heating, 2);
        assert!(out.iter().any(|r| r.id == "l1"));
        assert!(out.iter().any(|r| r.id == "c1"));
    }

    #[test]
    fn relaxation_pass_fills_from_one_category() {
        // only one category available: cap must relax to still deliver four
        let out = select(vec![
            rec("h1", Category::Heating, Priority::High, None, true),
            rec("h2", Category::Heating, Priority::High, None, true),
            rec("h3", Category::Heating, Priority::Medium, None, true),
            rec("h4", Category::Heating, Priority::Medium, None, true),
        ]);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn personalised_preferred_over_generic_at_same_rank() {
        let out = select(vec![
            rec("g1", Category::Cooking, Priority::Medium, None, false),
            rec("g2", Category::Appliances, Priority::Medium, None, false),
            rec("g3", Category::Insulation, Priority::Medium, None, false),
            rec("p1", Category::Heating, Priority::Medium, None, true),
            rec("p2", Category::Laundry, Priority::Medium, None, true),
            rec("p3", Category::Mobility, Priority::Medium, None, true),
            rec("p4", Category::Heating, Priority::Medium, None, true),
        ]);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|r| r.is_personalised));
    }

    #[test]
    fn pass_one_items_always_survive() {
        let out = select(vec![
            rec("must", Category::Laundry, Priority::High, Some(Impact::High), true),
            rec("m1", Category::Heating, Priority::High, None, true),
            rec("m2", Category::Heating, Priority::High, None, true),
            rec("m3", Category::Mobility, Priority::High, None, true),
        ]);
        assert!(out.iter().any(|r| r.id == "must"));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn fewer_than_four_inputs_pass_through() {
        let out = select(vec![rec(
            "only",
            Category::Appliances,
            Priority::Medium,
            None,
            true,
        )]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(select(Vec::new()).is_empty());
    }
}
