// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless range slider demo.
//!
//! Simulates dragging both thumbs of a `RangeSlider` wired to a printing
//! surface.
//!
//! Run:
//! - `RUST_LOG=twinrange_control=trace cargo run -p twinrange_demos --example headless_drag`

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use twinrange_control::{Bound, RangeSlider};
use twinrange_demos::{PrintSurface, present};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("twinrange_control=debug")),
        )
        .init();

    let mut slider = RangeSlider::new(PrintSurface::default());
    slider.add_observer(|v| println!("value changed: {:.3} .. {:.3}", v.lower(), v.upper()));

    println!("intrinsic size {:?}", slider.intrinsic_size());
    slider.set_size(Size::new(240.0, 30.0));
    present(&mut slider);

    for (bound, step) in [(Bound::Upper, 20.0), (Bound::Lower, 30.0)] {
        let start = slider.thumb_frame(bound).center();
        println!("drag {bound:?} from {start:?}");
        if !slider.touch_begin(start) {
            continue;
        }
        for i in 1..=4 {
            slider.touch_move(Point::new(start.x + step * f64::from(i), start.y));
        }
        slider.touch_end();
        present(&mut slider);
    }

    let track = slider.track_bounds();
    let miss = Point::new(track.x0 + track.width() * 0.05, 40.0);
    println!("touch at {miss:?} accepted: {}", slider.touch_begin(miss));
}
