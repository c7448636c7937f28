use shared::constants::WHEEL_VIEWBOX;
use shared::wheel_layout::Sector;
use shared::wheel_view::WheelFrame;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelViewProps {
    pub frame: WheelFrame,
    pub dark_mode: bool,
}

#[derive(Properties, PartialEq)]
struct WheelSectionProps {
    sector: Sector,
}

#[function_component(WheelSection)]
fn wheel_section(props: &WheelSectionProps) -> Html {
    let sector = &props.sector;
    let label = sector.label_position;
    let label_transform = format!("rotate({:.3} {:.3} {:.3})", sector.label_rotation, label.x, label.y);

    html! {
        <g class="wheel-section">
            <path d={sector.path.clone()} fill={sector.color.clone()} stroke-width="1" />
            <text
                x={format!("{:.3}", label.x)}
                y={format!("{:.3}", label.y)}
                text-anchor="middle"
                dominant-baseline="middle"
                transform={label_transform}
                class="text-sm font-medium fill-gray-900"
                style="font-size: 12px"
            >
                {sector.label.clone()}
            </text>
        </g>
    }
}

/// Draws the wheel body at the frame's rotation with the pointer fixed on top.
#[function_component(WheelView)]
pub fn wheel_view(props: &WheelViewProps) -> Html {
    let frame = &props.frame;
    let center = frame.geometry.center;
    let radius = frame.geometry.radius;
    let (disc_fill, disc_stroke) = if props.dark_mode {
        ("#1F2937", "#374151")
    } else {
        ("#F9FAFB", "#E5E7EB")
    };
    let pointer_fill = if frame.spinning { "#DC2626" } else { "#B91C1C" };

    html! {
        <svg
            width="100%"
            height="100%"
            viewBox={format!("0 0 {} {}", WHEEL_VIEWBOX, WHEEL_VIEWBOX)}
            role="img"
            aria-label="Prize wheel"
            class={if props.dark_mode { "filter-shadow-dark" } else { "filter-shadow-light" }}
        >
            <circle
                cx={center.x.to_string()}
                cy={center.y.to_string()}
                r={radius.to_string()}
                fill={disc_fill}
                stroke={disc_stroke}
                stroke-width="2"
            />

            <g transform={frame.wheel_transform()}>
                {for frame.sectors.iter().map(|sector| html! {
                    <WheelSection key={sector.index} sector={sector.clone()} />
                })}
            </g>

            <circle
                cx={center.x.to_string()}
                cy={center.y.to_string()}
                r="12"
                fill="#1F2937"
                stroke={pointer_fill}
                stroke-width="4"
            />
            <polygon points={frame.pointer_points.clone()} fill={pointer_fill} />
        </svg>
    }
}
