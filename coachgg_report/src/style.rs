use coachgg_schema::{BlockKind, BlockStyle, FontWeight, Rgb};

const INK: Rgb = Rgb(31, 41, 55);
const ACCENT: Rgb = Rgb(37, 99, 235);
const MUTED: Rgb = Rgb(107, 114, 128);

pub fn style_for(kind: BlockKind) -> BlockStyle {
    match kind {
        BlockKind::Title => BlockStyle {
            font_size_pt: 24.0,
            color: ACCENT,
            weight: FontWeight::Bold,
            leading_pt: 30.0,
            space_before_pt: 0.0,
        },
        BlockKind::Subtitle => BlockStyle {
            font_size_pt: 14.0,
            color: MUTED,
            weight: FontWeight::Normal,
            leading_pt: 18.0,
            space_before_pt: 0.0,
        },
        BlockKind::SectionHeader => BlockStyle {
            font_size_pt: 16.0,
            color: ACCENT,
            weight: FontWeight::Bold,
            leading_pt: 22.0,
            space_before_pt: 14.0,
        },
        BlockKind::Field | BlockKind::Bullet => BlockStyle {
            font_size_pt: 11.0,
            color: INK,
            weight: FontWeight::Normal,
            leading_pt: 15.0,
            space_before_pt: 0.0,
        },
        BlockKind::Paragraph => BlockStyle {
            font_size_pt: 11.0,
            color: INK,
            weight: FontWeight::Normal,
            leading_pt: 16.0,
            space_before_pt: 2.0,
        },
        BlockKind::Footer => BlockStyle {
            font_size_pt: 9.0,
            color: MUTED,
            weight: FontWeight::Normal,
            leading_pt: 12.0,
            space_before_pt: 20.0,
        },
    }
}
