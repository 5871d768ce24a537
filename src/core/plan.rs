use crate::core::{payload, serial};
use crate::domain::model::{LabelGroup, LabelPlan};

/// Builds the ordered label-plan sequence both renderers consume: for each
/// group, one summary plan followed by one detail plan per record. Groups
/// never interleave. `payload_base` is the distribution endpoint the QR
/// payloads point at; it differs between deployments, so the caller supplies
/// it per render.
pub fn build(groups: &[LabelGroup], payload_base: &str) -> Vec<LabelPlan> {
    let mut plans = Vec::new();

    for group in groups {
        plans.push(LabelPlan::Summary {
            model_name: group.key.clone(),
            item_count: group.items.len(),
        });

        for item in &group.items {
            plans.push(LabelPlan::Detail {
                model_name: group.key.clone(),
                gtin: item.gtin.clone(),
                production_date: item.production_date.clone(),
                serial: serial::split(&item.serial),
                payload: payload::compose(payload_base, item),
            });
        }
    }

    plans
}
