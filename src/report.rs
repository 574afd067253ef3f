//! Report body renderer: title and header info, the paginated results table,
//! the average-strength summary and free-text remarks. Page chrome (bars,
//! disclaimer, "Página N de M") is drawn by the canvas at commit time.

use crate::canvas::{BufferedCanvas, Color, Surface};
use crate::fonts::Font;
use crate::layout::wrap_text;
use crate::model::Report;

const MARGIN: f32 = 40.0;
const TOP_MARGIN: f32 = 40.0;
const TITLE_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 9.0;
const TABLE_SIZE: f32 = 8.0;
const ROW_H: f32 = 14.0;

const TITLE: &str = "Relatório de Ensaio de Compressão Axial";

struct Column {
    header: &'static str,
    x: f32,
    right_aligned: bool,
}

const COLUMNS: [Column; 7] = [
    Column { header: "CP", x: MARGIN, right_aligned: false },
    Column { header: "Moldagem", x: 95.0, right_aligned: false },
    Column { header: "Ruptura", x: 170.0, right_aligned: false },
    Column { header: "Idade (dias)", x: 295.0, right_aligned: true },
    Column { header: "Fck proj. (MPa)", x: 385.0, right_aligned: true },
    Column { header: "Carga (kN)", x: 465.0, right_aligned: true },
    Column { header: "Resistência (MPa)", x: 555.28, right_aligned: true },
];

pub(crate) fn render(report: &Report) -> Vec<u8> {
    let mut canvas = BufferedCanvas::a4();
    let (width, height) = canvas.page_size();
    let top = height - TOP_MARGIN;
    let bottom = canvas.footer_reserve() + 10.0;
    let mut y = top;

    canvas.set_fill_color(Color::BLACK);
    canvas.set_font(Font::HelveticaBold, TITLE_SIZE);
    canvas.draw_centred_string(width / 2.0, y, TITLE);
    y -= 26.0;

    canvas.set_font(Font::Helvetica, BODY_SIZE);
    let mut info = vec![
        format!("Obra: {}", report.obra),
        format!("Cliente: {}", report.cliente),
        format!("Data de emissão: {}", report.data_emissao),
    ];
    if let Some(resp) = &report.responsavel {
        info.push(format!("Responsável técnico: {resp}"));
    }
    for line in &info {
        canvas.draw_string(MARGIN, y, line);
        y -= 13.0;
    }
    y -= 8.0;

    y = draw_table_header(&mut canvas, width, y);

    for amostra in &report.amostras {
        if y < bottom {
            canvas.show_page();
            canvas.set_fill_color(Color::BLACK);
            y = draw_table_header(&mut canvas, width, top);
        }
        canvas.set_font(Font::Helvetica, TABLE_SIZE);
        let cells = [
            amostra.cp.clone(),
            amostra.data_moldagem.clone(),
            amostra.data_ruptura.clone(),
            amostra.idade_dias.to_string(),
            format_decimal(amostra.fck_projeto_mpa),
            format_decimal(amostra.carga_kn),
            format_decimal(amostra.resistencia_mpa),
        ];
        for (col, cell) in COLUMNS.iter().zip(&cells) {
            if col.right_aligned {
                canvas.draw_right_string(col.x, y, cell);
            } else {
                canvas.draw_string(col.x, y, cell);
            }
        }
        y -= ROW_H;
    }

    // Closing rule under the last row. With no rows the header underline
    // already sits at this y, so skip it.
    if !report.amostras.is_empty() {
        canvas.fill_rect(MARGIN, y + ROW_H - 4.0, width - 2.0 * MARGIN, 0.7);
        y -= 4.0;
    }

    if let Some(media) = report.resistencia_media_mpa() {
        if y < bottom {
            canvas.show_page();
            canvas.set_fill_color(Color::BLACK);
            y = top;
        }
        canvas.set_font(Font::HelveticaBold, BODY_SIZE);
        canvas.draw_right_string(
            width - MARGIN,
            y,
            &format!("Resistência média: {} MPa", format_decimal(media)),
        );
        y -= 20.0;
    }

    if let Some(obs) = &report.observacoes {
        canvas.set_font(Font::Helvetica, TABLE_SIZE);
        let max_w = width - 2.0 * MARGIN;
        for line in wrap_text(&format!("Observações: {obs}"), Font::Helvetica, TABLE_SIZE, max_w)
        {
            if y < bottom {
                canvas.show_page();
                canvas.set_fill_color(Color::BLACK);
                canvas.set_font(Font::Helvetica, TABLE_SIZE);
                y = top;
            }
            canvas.draw_string(MARGIN, y, &line);
            y -= 11.0;
        }
    }

    canvas.show_page();
    log::debug!(
        "report body: {} rows across {} pages",
        report.amostras.len(),
        canvas.pages_buffered(),
    );
    canvas.finish()
}

fn draw_table_header(canvas: &mut BufferedCanvas, width: f32, y: f32) -> f32 {
    canvas.set_font(Font::HelveticaBold, TABLE_SIZE);
    for col in &COLUMNS {
        if col.right_aligned {
            canvas.draw_right_string(col.x, y, col.header);
        } else {
            canvas.draw_string(col.x, y, col.header);
        }
    }
    canvas.fill_rect(MARGIN, y - 4.0, width - 2.0 * MARGIN, 0.7);
    y - ROW_H
}

/// One decimal place, comma as the decimal separator (pt-BR).
fn format_decimal(value: f32) -> String {
    format!("{value:.1}").replace('.', ",")
}
