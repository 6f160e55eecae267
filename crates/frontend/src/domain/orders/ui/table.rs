use contracts::orders::{AllOrdersResponse, FilterArgs, OrderRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::columns::{visible_columns, ColumnOption, ColumnRender};
use crate::domain::orders::constants::{tag_color, PAGE_SIZES};
use crate::domain::orders::state::OrderTableState;
use crate::layout::global_context::use_app_context;
use crate::shared::clipboard;
use crate::shared::date_utils::format_date;

fn fmt_date(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| format_date(v))
}

/// Project one cell out of a row by column data index. Date columns come
/// back from the server as ISO strings and are shown US-style.
fn cell_value(record: &OrderRecord, data_index: &str) -> Option<String> {
    let base = record.general();
    let cdl = record.cdl_fields();
    match data_index {
        "title" => base.title.clone(),
        "orderNumber" => base.order_number.clone(),
        "barcode" => base.barcode.clone(),
        "createdDate" => fmt_date(&base.created_date),
        "arrivalDate" => fmt_date(&base.arrival_date),
        "arrivalText" => base.arrival_text.clone(),
        "arrivalStatus" => base.arrival_status.clone(),
        "arrivalOperator" => base.arrival_operator.clone(),
        "ipsCode" => base.ips_code.clone(),
        "ipsDate" => fmt_date(&base.ips_date),
        "ipsUpdateDate" => fmt_date(&base.ips_update_date),
        "ipsCodeOperator" => base.ips_code_operator.clone(),
        "itemsCreated" => base.items_created.clone(),
        "itemStatus" => base.item_status.clone(),
        "material" => base.material.clone(),
        "materialType" => base.material_type.clone(),
        "collection" => base.collection.clone(),
        "updateDate" => fmt_date(&base.update_date),
        "sublibrary" => base.sublibrary.clone(),
        "orderStatus" => base.order_status.clone(),
        "orderStatusUpdateDate" => fmt_date(&base.order_status_update_date),
        "invoiceStatus" => base.invoice_status.clone(),
        "orderType" => base.order_type.clone(),
        "orderUnit" => base.order_unit.clone(),
        "totalPrice" => base.total_price.clone(),
        "vendorCode" => base.vendor_code.clone(),
        "bsn" => base.bsn.clone(),
        "libraryNote" => base.library_note.clone(),
        "trackingNote" => base.tracking_note.clone(),
        "cdlItemStatus" => cdl.and_then(|c| c.cdl_item_status.clone()),
        "orderRequestDate" => cdl.and_then(|c| fmt_date(&c.order_request_date)),
        "scanningVendorPaymentDate" => cdl.and_then(|c| fmt_date(&c.scanning_vendor_payment_date)),
        "pdfDeliveryDate" => cdl.and_then(|c| fmt_date(&c.pdf_delivery_date)),
        "backToKarmsDate" => cdl.and_then(|c| fmt_date(&c.back_to_karms_date)),
        "circPdfUrl" => cdl.and_then(|c| c.circ_pdf_url.clone()),
        "dueDate" => cdl.and_then(|c| fmt_date(&c.due_date)),
        "physicalCopyStatus" => cdl.and_then(|c| c.physical_copy_status.clone()),
        "vendorFileUrl" => cdl.and_then(|c| c.vendor_file_url.clone()),
        "bobcatPermanentLink" => cdl.and_then(|c| c.bobcat_permanent_link.clone()),
        "filePassword" => cdl.and_then(|c| c.file_password.clone()),
        "author" => cdl.and_then(|c| c.author.clone()),
        "pages" => cdl.and_then(|c| c.pages.clone()),
        _ => None,
    }
}

fn render_cell(column: &ColumnOption, record: &OrderRecord) -> AnyView {
    let value = cell_value(record, column.data_index).unwrap_or_default();
    match column.render {
        ColumnRender::Link if !value.is_empty() => view! {
            <a
                href=value.clone()
                target="_blank"
                rel="noreferrer"
                style="color: #1677ff; text-decoration: none; display: block; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;"
            >
                {value.clone()}
            </a>
        }
        .into_any(),
        ColumnRender::IpsCode => {
            let hover = record.general().ips.clone().unwrap_or_default();
            view! {
                <span title=hover>{value}</span>
            }
            .into_any()
        }
        _ => view! {
            <span
                title=value.clone()
                style="display: block; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;"
            >
                {value.clone()}
            </span>
        }
        .into_any(),
    }
}

#[component]
pub fn OrdersTable(
    state: RwSignal<OrderTableState>,
    orders: ReadSignal<AllOrdersResponse>,
    is_loading: ReadSignal<bool>,
    on_edit: Callback<(i64, bool)>,
) -> impl IntoView {
    let ctx = use_app_context();

    let columns =
        move || state.with(|s| visible_columns(&s.column_options, s.views.cdl_view));

    let visible_ids = move || {
        orders.with(|response| response.result.iter().map(|row| row.id()).collect::<Vec<_>>())
    };

    let all_selected = move || {
        let ids = visible_ids();
        !ids.is_empty() && state.with(|s| ids.iter().all(|id| s.is_selected(*id)))
    };

    let toggle_all = move |_| {
        let ids = visible_ids();
        state.update(|s| {
            if ids.iter().all(|id| s.is_selected(*id)) {
                s.selected_ids.retain(|id| !ids.contains(id));
            } else {
                for id in ids {
                    if !s.is_selected(id) {
                        s.selected_ids.push(id);
                    }
                }
            }
        });
    };

    let add_tag_filter = move |tag: String| {
        state.update(|s| {
            let mut options = s.filter_options.clone();
            for option in &mut options {
                if let FilterArgs::In { col, val } = &mut option.args {
                    if col == "tags" && !val.contains(&tag) {
                        val.push(tag.clone());
                    }
                }
            }
            s.commit_filter_options(options);
        });
    };

    let copy_pdf_url = move |url: String| {
        spawn_local(async move {
            match clipboard::copy_text(&url).await {
                Ok(()) => ctx.show_message("PDF URL copied."),
                Err(e) => ctx.show_error(&e),
            }
        });
    };

    let sort_marker = move |col: &'static str| {
        state.with(|s| {
            if s.sorter.col == col {
                if s.sorter.desc {
                    " \u{2193}"
                } else {
                    " \u{2191}"
                }
            } else {
                ""
            }
        })
    };

    let total_pages = move || orders.with(|response| response.page_limit.max(1));
    let page_index = move || state.with(|s| s.page_index);

    view! {
        <div style=move || format!(
            "flex: 1; overflow: auto; background: white; {}",
            if is_loading.get() { "opacity: 0.55; pointer-events: none;" } else { "" }
        )>
            <table style="width: 100%; border-collapse: collapse; font-size: 13px; table-layout: fixed;">
                <thead>
                    <tr style="position: sticky; top: 0; background: #fafafa; z-index: 1;">
                        <th style="width: 2rem; padding: 6px; border-bottom: 1px solid #ddd;">
                            <input
                                type="checkbox"
                                prop:checked=all_selected
                                on:change=toggle_all
                            />
                        </th>
                        <th style="width: 3rem; padding: 6px; border-bottom: 1px solid #ddd; text-align: left;">
                            {"#"}
                        </th>
                        <th style="width: 8rem; padding: 6px; border-bottom: 1px solid #ddd; text-align: left;">
                            {"Tags"}
                        </th>
                        {move || columns()
                            .into_iter()
                            .map(|column| {
                                let col = column.data_index;
                                let sortable = column.sortable;
                                view! {
                                    <th
                                        style=format!(
                                            "width: {}; padding: 6px; border-bottom: 1px solid #ddd; text-align: left; {}",
                                            column.width,
                                            if sortable { "cursor: pointer; user-select: none;" } else { "" },
                                        )
                                        on:click=move |_| {
                                            if sortable {
                                                state.update(|s| s.toggle_sort(col));
                                            }
                                        }
                                    >
                                        {column.display_title()}
                                        {move || sort_marker(col)}
                                    </th>
                                }
                            })
                            .collect_view()}
                        <th style="width: 7rem; padding: 6px; border-bottom: 1px solid #ddd; text-align: left;">
                            {"Actions"}
                        </th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let page_offset = state.with(|s| s.page_index * s.page_size);
                        orders
                            .get()
                            .result
                            .into_iter()
                            .enumerate()
                            .map(|(index, record)| {
                                let id = record.id();
                                let is_cdl = record.is_cdl();
                                let tags = record.general().tags.clone();
                                let attention = record.general().attention;
                                let checked = record.general().checked;
                                let pdf_url = record
                                    .cdl_fields()
                                    .and_then(|c| c.circ_pdf_url.clone());
                                let row_style = if attention {
                                    "background: #fff1f0;"
                                } else if checked {
                                    "background: #f6ffed;"
                                } else {
                                    ""
                                };
                                view! {
                                    <tr style=format!("border-bottom: 1px solid #f0f0f0; {}", row_style)>
                                        <td style="padding: 6px;">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || state.with(|s| s.is_selected(id))
                                                on:change=move |_| state.update(|s| s.toggle_selected(id))
                                            />
                                        </td>
                                        <td style="padding: 6px; color: #999;">
                                            {page_offset + index + 1}
                                        </td>
                                        <td style="padding: 6px;">
                                            {tags
                                                .into_iter()
                                                .map(|tag| {
                                                    let color = tag_color(&tag);
                                                    let label = tag.clone();
                                                    view! {
                                                        <span
                                                            style=format!(
                                                                "display: inline-block; margin: 1px 2px; padding: 0 6px; border-radius: 8px; color: white; font-size: 11px; cursor: pointer; background: {};",
                                                                color,
                                                            )
                                                            on:click=move |_| add_tag_filter(tag.clone())
                                                        >
                                                            {label}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </td>
                                        {columns()
                                            .iter()
                                            .map(|column| view! {
                                                <td style="padding: 6px;">
                                                    {render_cell(column, &record)}
                                                </td>
                                            })
                                            .collect_view()}
                                        <td style="padding: 6px;">
                                            <button
                                                style="padding: 2px 8px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                                                on:click=move |_| on_edit.run((id, is_cdl))
                                            >
                                                {"Edit"}
                                            </button>
                                            {pdf_url.map(|url| view! {
                                                <button
                                                    style="margin-left: 4px; padding: 2px 8px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                                                    on:click=move |_| copy_pdf_url(url.clone())
                                                >
                                                    {"Copy"}
                                                </button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>

        <div style="display: flex; gap: 12px; align-items: center; padding: 8px 14px; background: white; border-top: 1px solid #ddd; font-size: 13px;">
            <button
                style="padding: 2px 10px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                disabled=move || page_index() == 0
                on:click=move |_| state.update(|s| {
                    let current = s.page_index;
                    s.set_page_index(current.saturating_sub(1));
                })
            >
                {"Prev"}
            </button>
            <span>
                {move || format!("Page {} of {}", page_index() + 1, total_pages())}
            </span>
            <button
                style="padding: 2px 10px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                disabled=move || page_index() + 1 >= total_pages()
                on:click=move |_| state.update(|s| {
                    let current = s.page_index;
                    s.set_page_index(current + 1);
                })
            >
                {"Next"}
            </button>
            <select
                style="padding: 2px 6px;"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        state.update(|s| s.set_page_size(size));
                    }
                }
            >
                {PAGE_SIZES
                    .into_iter()
                    .map(|size| view! {
                        <option
                            value=size.to_string()
                            selected=move || state.with(|s| s.page_size == size)
                        >
                            {format!("{} / page", size)}
                        </option>
                    })
                    .collect_view()}
            </select>
            <span style="margin-left: auto; color: #666;">
                {move || orders.with(|response| format!("{} orders", response.total_records))}
            </span>
        </div>
    }
}
