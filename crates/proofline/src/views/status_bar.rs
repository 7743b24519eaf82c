//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] emoji message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 2 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let right = area.x + area.width;
        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let ts = format!("[{}] ", vm.timestamp);
            let (end, _) = buf.set_stringn(x, area.y, &ts, (right - x) as usize, vm.metadata_style);
            x = end;
        }

        let emoji = format!("{} ", vm.emoji);
        let (end, _) = buf.set_stringn(
            x,
            area.y,
            &emoji,
            right.saturating_sub(x) as usize,
            vm.message_style,
        );
        x = end;

        let source = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let source_width = Line::raw(source.as_str()).width() as u16;

        // Message gets whatever is left between the emoji and the source
        let available = right.saturating_sub(x + source_width + 2) as usize;
        let message_width = Line::raw(vm.message.as_str()).width();
        if message_width > available {
            let truncated: String = vm.message.chars().take(available.saturating_sub(1)).collect();
            buf.set_stringn(x, area.y, format!("{}…", truncated), available, vm.message_style);
        } else {
            buf.set_stringn(x, area.y, &vm.message, available, vm.message_style);
        }

        if !source.is_empty() && source_width + 1 < area.width {
            let source_x = right - source_width - 1;
            buf.set_string(source_x, area.y, &source, vm.metadata_style);
        }
    }
}
