// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests: arbitrary gestures and direct writes never break ordering
//! or leave a thumb outside the control.

use kurbo::{Point, Size};
use proptest::prelude::*;
use twinrange_control::{Bound, RangeSlider};

#[derive(Clone, Debug)]
enum Op {
    Begin(f64, f64),
    Move(f64, f64),
    End,
    SetLower(f64),
    SetUpper(f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-20.0_f64..260.0, 0.0_f64..30.0).prop_map(|(x, y)| Op::Begin(x, y)),
        (-100.0_f64..400.0, -10.0_f64..40.0).prop_map(|(x, y)| Op::Move(x, y)),
        Just(Op::End),
        (0.0_f64..=1.0).prop_map(Op::SetLower),
        (0.0_f64..=1.0).prop_map(Op::SetUpper),
    ]
}

proptest! {
    #[test]
    fn any_op_sequence_keeps_values_ordered(ops in prop::collection::vec(op(), 0..48)) {
        let mut slider = RangeSlider::new(());
        slider.set_size(Size::new(240.0, 30.0));
        for op in ops {
            match op {
                Op::Begin(x, y) => {
                    slider.touch_begin(Point::new(x, y));
                }
                Op::Move(x, y) => {
                    slider.touch_move(Point::new(x, y));
                }
                Op::End => slider.touch_end(),
                Op::SetLower(v) => slider.set_lower_value(v),
                Op::SetUpper(v) => slider.set_upper_value(v),
            }
            prop_assert!(slider.lower_value() <= slider.upper_value());
            prop_assert!((0.0..=1.0).contains(&slider.lower_value()));
            prop_assert!((0.0..=1.0).contains(&slider.upper_value()));
            let track = slider.track_bounds();
            for bound in Bound::ALL {
                let cx = slider.thumb_frame(bound).center().x;
                prop_assert!(cx >= track.x0 - 1e-9 && cx <= track.x1 + 1e-9);
            }
        }
    }
}
