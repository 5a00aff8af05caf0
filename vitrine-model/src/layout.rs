/// Measurements the layout resolver works from.
///
/// Derived on every resize and index change; never authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutMetrics {
    pub container_width: f32,
    pub item_width: f32,
    pub gap: f32,
}

impl LayoutMetrics {
    pub fn new(container_width: f32, item_width: f32, gap: f32) -> Self {
        Self {
            container_width,
            item_width,
            gap,
        }
    }

    /// True once the host has laid out both the container and an item.
    pub fn is_measured(&self) -> bool {
        self.container_width.is_finite()
            && self.item_width.is_finite()
            && self.gap.is_finite()
            && self.container_width > 0.0
            && self.item_width > 0.0
    }

    /// Distance between the leading edges of two adjacent items.
    pub fn stride(&self) -> f32 {
        self.item_width + self.gap.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_layouts() {
        assert!(!LayoutMetrics::default().is_measured());
        assert!(!LayoutMetrics::new(800.0, 0.0, 16.0).is_measured());
        assert!(!LayoutMetrics::new(800.0, f32::NAN, 16.0).is_measured());
        assert!(LayoutMetrics::new(800.0, 300.0, 16.0).is_measured());
    }

    #[test]
    fn stride_ignores_negative_gap() {
        assert_eq!(LayoutMetrics::new(800.0, 300.0, -4.0).stride(), 300.0);
        assert_eq!(LayoutMetrics::new(800.0, 300.0, 20.0).stride(), 320.0);
    }
}
